use crate::domain::errors::PredictionError;
use crate::domain::ml::artifact::RegressorModel;
use crate::domain::ml::tree_ensemble::TreeEnsemble;

/// Interface for trained regression models
pub trait Regressor: Send + Sync {
    /// Predict the raw (still transformed) target value for one design row
    fn predict_row(&self, row: &[f64]) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}

impl Regressor for TreeEnsemble {
    fn predict_row(&self, row: &[f64]) -> Result<f64, PredictionError> {
        Ok(TreeEnsemble::predict_row(self, row))
    }

    fn name(&self) -> &str {
        "Gradient Boosted Trees"
    }
}

impl Regressor for RegressorModel {
    fn predict_row(&self, row: &[f64]) -> Result<f64, PredictionError> {
        match self {
            RegressorModel::GradientBoosted(ensemble) => Regressor::predict_row(ensemble, row),
            RegressorModel::RandomForest(model) => model.as_ref().predict_row(row),
        }
    }

    fn name(&self) -> &str {
        match self {
            RegressorModel::GradientBoosted(ensemble) => ensemble.name(),
            RegressorModel::RandomForest(model) => model.as_ref().name(),
        }
    }
}
