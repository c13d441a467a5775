use crate::application::ml::prediction_service::{PredictionRow, PredictionService};
use crate::domain::chart::format_percent;
use crate::domain::errors::InputValidationError;
use crate::domain::validation::PredictionInputs;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// What the output panel shows for the current form values
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    /// Form values rejected before any model is touched
    Invalid(InputValidationError),
    Ready(PredictionRow),
    /// A model could not be loaded or evaluated
    Failed(String),
}

pub struct PredictionCell {
    pub label: &'static str,
    pub text: String,
    pub color: egui::Color32,
}

pub struct PredictionViewModel;

impl PredictionViewModel {
    pub fn compute(service: &PredictionService, inputs: &PredictionInputs) -> PredictionOutcome {
        let record = match inputs.validate() {
            Ok(record) => record,
            Err(e) => return PredictionOutcome::Invalid(e),
        };

        match service.predict_all(&record) {
            Ok(row) => PredictionOutcome::Ready(row),
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                PredictionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Green above zero, red at or below
    pub fn value_color(value: f64) -> egui::Color32 {
        if value > 0.0 {
            DesignSystem::POSITIVE
        } else {
            DesignSystem::NEGATIVE
        }
    }

    pub fn cells(row: &PredictionRow) -> [PredictionCell; 2] {
        [
            PredictionCell {
                label: "ROI",
                text: format_percent(row.roi, 2),
                color: Self::value_color(row.roi),
            },
            PredictionCell {
                label: "Fee APR",
                text: format_percent(row.fee_apr, 2),
                color: Self::value_color(row.fee_apr),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::artifact::{ModelArtifact, RegressorModel};
    use crate::domain::ml::preprocessing::{ColumnTransform, Preprocessor};
    use crate::domain::ml::tree_ensemble::TreeEnsemble;
    use crate::infrastructure::in_memory::InMemoryModelRepository;
    use std::sync::Arc;

    fn constant(target: &str, raw: f64) -> ModelArtifact {
        ModelArtifact::new(
            target,
            Preprocessor::new(vec![ColumnTransform::Passthrough {
                column: "age".to_string(),
            }]),
            RegressorModel::GradientBoosted(TreeEnsemble {
                base_score: raw,
                trees: vec![],
            }),
        )
    }

    fn service(artifacts: Vec<ModelArtifact>) -> PredictionService {
        let repo = InMemoryModelRepository::new();
        for artifact in artifacts {
            repo.insert(artifact);
        }
        PredictionService::new(Arc::new(repo))
    }

    #[test]
    fn test_value_color_sign() {
        assert_eq!(PredictionViewModel::value_color(0.01), DesignSystem::POSITIVE);
        assert_eq!(PredictionViewModel::value_color(0.0), DesignSystem::NEGATIVE);
        assert_eq!(PredictionViewModel::value_color(-0.2), DesignSystem::NEGATIVE);
    }

    #[test]
    fn test_cells_format_two_decimal_percent() {
        let cells = PredictionViewModel::cells(&PredictionRow {
            roi: 0.0512,
            fee_apr: -0.003,
        });
        assert_eq!(cells[0].label, "ROI");
        assert_eq!(cells[0].text, "5.12%");
        assert_eq!(cells[0].color, DesignSystem::POSITIVE);
        assert_eq!(cells[1].text, "-0.30%");
        assert_eq!(cells[1].color, DesignSystem::NEGATIVE);
    }

    #[test]
    fn test_inverted_bounds_never_reach_the_models() {
        // No artifacts at all: a model lookup would fail with Failed
        let service = service(vec![]);
        let inputs = PredictionInputs {
            price_lower: 14.0,
            price_upper: 13.0,
            ..PredictionInputs::default()
        };
        match PredictionViewModel::compute(&service, &inputs) {
            PredictionOutcome::Invalid(InputValidationError::InvertedRange { .. }) => {}
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_invalid_outcome_can_be_kept_between_frames() {
        let outcome = PredictionOutcome::Invalid(InputValidationError::InvertedRange {
            lower: 14.0,
            upper: 13.0,
        });
        let kept = outcome.clone();
        assert_eq!(kept, outcome);
    }

    #[test]
    fn test_ready_with_both_targets() {
        let service = service(vec![constant("roi", 0.04), constant("log1p_fee_apr", 0.0)]);
        let outcome = PredictionViewModel::compute(&service, &PredictionInputs::default());
        assert_eq!(
            outcome,
            PredictionOutcome::Ready(PredictionRow {
                roi: 0.04,
                fee_apr: 0.0
            })
        );
    }

    #[test]
    fn test_missing_artifact_is_failed() {
        let service = service(vec![constant("roi", 0.04)]);
        let outcome = PredictionViewModel::compute(&service, &PredictionInputs::default());
        assert!(matches!(outcome, PredictionOutcome::Failed(msg) if msg.contains("log1p_fee_apr")));
    }
}
