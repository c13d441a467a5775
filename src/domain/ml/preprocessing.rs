//! Column transforms applied to a [`FeatureRecord`] before it reaches a regressor.
//!
//! The training pipeline one-hot encodes the fee tier, applies `log1p` to the
//! long-tailed columns and standardizes the lower price bound. Artifacts carry
//! that pipeline so the design row is rebuilt identically at prediction time.

use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::{FeatureRecord, FeatureValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnTransform {
    /// Emits one indicator per category, in the listed order
    OneHot {
        column: String,
        categories: Vec<String>,
    },
    Log1p {
        column: String,
    },
    Standardize {
        column: String,
        mean: f64,
        std: f64,
    },
    Passthrough {
        column: String,
    },
}

impl ColumnTransform {
    pub fn column(&self) -> &str {
        match self {
            ColumnTransform::OneHot { column, .. }
            | ColumnTransform::Log1p { column }
            | ColumnTransform::Standardize { column, .. }
            | ColumnTransform::Passthrough { column } => column,
        }
    }

    /// Number of design-row cells this transform produces
    pub fn width(&self) -> usize {
        match self {
            ColumnTransform::OneHot { categories, .. } => categories.len(),
            _ => 1,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            ColumnTransform::OneHot { column, categories } if categories.is_empty() => {
                Err(format!("one-hot encoding of '{}' has no categories", column))
            }
            ColumnTransform::Standardize { column, mean, std }
                if !mean.is_finite() || !std.is_finite() || *std <= 0.0 =>
            {
                Err(format!(
                    "standardization of '{}' needs a finite mean and a finite positive std, got mean {} std {}",
                    column, mean, std
                ))
            }
            _ => Ok(()),
        }
    }

    fn apply(&self, record: &FeatureRecord, row: &mut Vec<f64>) -> Result<(), PredictionError> {
        let value = record
            .value(self.column())
            .ok_or_else(|| PredictionError::Computation {
                reason: format!("unknown feature column '{}'", self.column()),
            })?;

        match (self, value) {
            (ColumnTransform::OneHot { categories, .. }, FeatureValue::Categorical(label)) => {
                if !categories.iter().any(|c| c == label) {
                    return Err(PredictionError::InvalidInput {
                        reason: format!(
                            "category '{}' of '{}' was not seen in training",
                            label,
                            self.column()
                        ),
                    });
                }
                row.extend(
                    categories
                        .iter()
                        .map(|c| if c == label { 1.0 } else { 0.0 }),
                );
            }
            (ColumnTransform::Log1p { .. }, FeatureValue::Numeric(v)) => row.push(v.ln_1p()),
            (ColumnTransform::Standardize { mean, std, .. }, FeatureValue::Numeric(v)) => {
                row.push((v - mean) / std)
            }
            (ColumnTransform::Passthrough { .. }, FeatureValue::Numeric(v)) => row.push(v),
            (transform, value) => {
                return Err(PredictionError::Computation {
                    reason: format!(
                        "transform {:?} cannot be applied to {:?}",
                        transform, value
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Ordered list of column transforms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preprocessor {
    steps: Vec<ColumnTransform>,
}

impl Preprocessor {
    pub fn new(steps: Vec<ColumnTransform>) -> Self {
        Self { steps }
    }

    /// Number of cells in the design row
    pub fn output_width(&self) -> usize {
        self.steps.iter().map(ColumnTransform::width).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.steps.is_empty() {
            return Err("preprocessing pipeline is empty".to_string());
        }
        self.steps.iter().try_for_each(ColumnTransform::validate)
    }

    /// Builds the numeric design row for one record
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictionError> {
        let mut row = Vec::with_capacity(self.output_width());
        for step in &self.steps {
            step.apply(record, &mut row)?;
        }
        Ok(row)
    }
}
