//! Live predictions from pre-trained models.
//!
//! One call builds a single-row feature record, evaluates the target's model
//! and maps the raw output back to the target's original units.

use super::predictor::Regressor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::artifact::ModelArtifact;
use crate::domain::ml::feature_registry::{FeatureRecord, FeeTier};
use crate::domain::ml::target::Target;
use crate::domain::repositories::ModelRepository;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Predictions for both dashboard targets, in original units (proportions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRow {
    pub roi: f64,
    pub fee_apr: f64,
}

pub struct PredictionService {
    models: Arc<dyn ModelRepository>,
    roi_target: Target,
    fee_apr_target: Target,
}

impl PredictionService {
    pub fn new(models: Arc<dyn ModelRepository>) -> Self {
        Self {
            models,
            roi_target: Target::roi(),
            fee_apr_target: Target::log1p_fee_apr(),
        }
    }

    /// Predict `target` from raw inputs.
    ///
    /// `fee_tier` must be one of the known tiers; anything else is
    /// `InvalidInput` and no artifact is read. Bound ordering is not checked.
    pub fn predict(
        &self,
        target: &str,
        fee_tier: &str,
        price_lower: f64,
        price_upper: f64,
        age: f64,
    ) -> Result<f64, PredictionError> {
        let target = Target::parse(target).ok_or_else(|| PredictionError::InvalidInput {
            reason: format!("invalid target name '{}'", target),
        })?;
        let fee_tier: FeeTier = fee_tier.parse()?;
        let record = FeatureRecord::new(fee_tier, price_lower, price_upper, age);
        self.predict_record(&target, &record)
    }

    pub fn predict_record(
        &self,
        target: &Target,
        record: &FeatureRecord,
    ) -> Result<f64, PredictionError> {
        record.ensure_finite()?;

        let artifact = self.models.load_model(target)?;
        let raw = evaluate(&artifact, record)?;
        let prediction = target.transform().inverse(raw);

        if !prediction.is_finite() {
            return Err(PredictionError::Computation {
                reason: format!(
                    "inverse transform of {} produced {} for target '{}'",
                    raw, prediction, target
                ),
            });
        }

        debug!(
            "Predicted {} = {:.6} (raw {:.6}) with {}",
            target,
            prediction,
            raw,
            artifact.regressor.name()
        );
        Ok(prediction)
    }

    /// Predict ROI and fee APR for the same position
    pub fn predict_all(&self, record: &FeatureRecord) -> Result<PredictionRow, PredictionError> {
        let row = PredictionRow {
            roi: self.predict_record(&self.roi_target, record)?,
            fee_apr: self.predict_record(&self.fee_apr_target, record)?,
        };
        info!(
            "Prediction for {} [{:.3}, {:.3}] over {:.1}d: ROI {:.4}, Fee APR {:.4}",
            record.fee_tier, record.price_lower, record.price_upper, record.age, row.roi, row.fee_apr
        );
        Ok(row)
    }
}

/// Raw model output for one record, before any inverse transform
pub fn evaluate(artifact: &ModelArtifact, record: &FeatureRecord) -> Result<f64, PredictionError> {
    let row = artifact.preprocessing.transform(record)?;
    let raw = artifact.regressor.predict_row(&row)?;
    if !raw.is_finite() {
        return Err(PredictionError::Computation {
            reason: format!("model for '{}' returned {}", artifact.target, raw),
        });
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::artifact::RegressorModel;
    use crate::domain::ml::preprocessing::{ColumnTransform, Preprocessor};
    use crate::domain::ml::tree_ensemble::{RegressionTree, TreeEnsemble};
    use crate::infrastructure::in_memory::InMemoryModelRepository;

    fn one_hot_fee_tier() -> Preprocessor {
        Preprocessor::new(vec![
            ColumnTransform::OneHot {
                column: "fee_tier".to_string(),
                categories: vec!["0.05%".to_string(), "0.3%".to_string()],
            },
            ColumnTransform::Passthrough {
                column: "price_rng_width".to_string(),
            },
        ])
    }

    fn constant(target: &str, raw: f64) -> ModelArtifact {
        ModelArtifact::new(
            target,
            one_hot_fee_tier(),
            RegressorModel::GradientBoosted(TreeEnsemble {
                base_score: raw,
                trees: vec![],
            }),
        )
    }

    fn service_with(artifacts: Vec<ModelArtifact>) -> PredictionService {
        let repo = InMemoryModelRepository::new();
        for artifact in artifacts {
            repo.insert(artifact);
        }
        PredictionService::new(Arc::new(repo))
    }

    #[test]
    fn test_log1p_target_zero_maps_to_zero() {
        let service = service_with(vec![constant("log1p_fee_apr", 0.0)]);
        let pred = service
            .predict("log1p_fee_apr", "0.05%", 12.0, 14.0, 7.0)
            .unwrap();
        assert_eq!(pred, 0.0);
    }

    #[test]
    fn test_log1p_target_applies_exp_minus_one() {
        for raw in [-1.5, 0.25, 0.9] {
            let service = service_with(vec![constant("log1p_fee_apr", raw)]);
            let pred = service
                .predict("log1p_fee_apr", "0.3%", 12.0, 14.0, 7.0)
                .unwrap();
            assert_eq!(pred, raw.exp() - 1.0);
        }
    }

    #[test]
    fn test_identity_target_returns_raw_output() {
        let service = service_with(vec![constant("roi", 0.05)]);
        let pred = service.predict("roi", "0.05%", 12.0, 14.0, 7.0).unwrap();
        assert_eq!(pred, 0.05);
    }

    #[test]
    fn test_unknown_fee_tier_is_invalid_input() {
        let service = service_with(vec![constant("roi", 0.05)]);
        let err = service.predict("roi", "1%", 12.0, 14.0, 7.0).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput { .. }));
    }

    #[test]
    fn test_missing_artifact() {
        let service = service_with(vec![]);
        let err = service.predict("roi", "0.05%", 12.0, 14.0, 7.0).unwrap_err();
        assert!(matches!(err, PredictionError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_inverted_range_is_not_checked() {
        // width feature goes negative and the tree routes on it
        let artifact = ModelArtifact::new(
            "roi",
            one_hot_fee_tier(),
            RegressorModel::GradientBoosted(TreeEnsemble {
                base_score: 0.0,
                trees: vec![RegressionTree {
                    left_children: vec![1, -1, -1],
                    right_children: vec![2, -1, -1],
                    split_indices: vec![2, 0, 0],
                    split_conditions: vec![0.0, -0.1, 0.1],
                    default_left: vec![false, false, false],
                }],
            }),
        );
        let service = service_with(vec![artifact]);

        assert_eq!(service.predict("roi", "0.05%", 14.0, 12.0, 7.0).unwrap(), -0.1);
        assert_eq!(service.predict("roi", "0.05%", 12.0, 14.0, 7.0).unwrap(), 0.1);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let service = service_with(vec![constant("roi", 0.0123)]);
        let a = service.predict("roi", "0.3%", 12.5, 15.0, 30.0).unwrap();
        let b = service.predict("roi", "0.3%", 12.5, 15.0, 30.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_predict_all_uses_both_targets() {
        let service = service_with(vec![constant("roi", 0.05), constant("log1p_fee_apr", 0.5)]);
        let record = FeatureRecord::new(FeeTier::Bps5, 12.0, 14.0, 7.0);
        let row = service.predict_all(&record).unwrap();

        assert_eq!(row.roi, 0.05);
        assert_eq!(row.fee_apr, 0.5_f64.exp() - 1.0);
    }

    #[test]
    fn test_overflowing_inverse_is_computation_error() {
        let service = service_with(vec![constant("log1p_fee_apr", 1000.0)]);
        let err = service
            .predict("log1p_fee_apr", "0.05%", 12.0, 14.0, 7.0)
            .unwrap_err();
        assert!(matches!(err, PredictionError::Computation { .. }));
    }
}
