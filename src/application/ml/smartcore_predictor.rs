use super::predictor::Regressor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::artifact::ForestModel;
use smartcore::linalg::basic::matrix::DenseMatrix;

impl Regressor for ForestModel {
    fn predict_row(&self, row: &[f64]) -> Result<f64, PredictionError> {
        if row.len() != self.n_features {
            return Err(PredictionError::Computation {
                reason: format!(
                    "random forest expects {} features, got {}",
                    self.n_features,
                    row.len()
                ),
            });
        }

        let input_matrix = match DenseMatrix::from_2d_vec(&vec![row.to_vec()]) {
            Ok(m) => m,
            Err(e) => {
                return Err(PredictionError::Computation {
                    reason: format!("Matrix creation failed: {}", e),
                });
            }
        };

        match self.forest.predict(&input_matrix) {
            Ok(predictions) => predictions
                .first()
                .copied()
                .ok_or_else(|| PredictionError::Computation {
                    reason: "No prediction returned".to_string(),
                }),
            Err(e) => Err(PredictionError::Computation {
                reason: format!("Prediction failed: {}", e),
            }),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
