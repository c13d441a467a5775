use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered list of raw feature columns.
/// This order MUST match the column order the models were trained on.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "fee_tier",
    "price_lower",
    "price_upper",
    "price_rng_width",
    "age",
];

/// Pool fee tier of a WBTC-WETH position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    #[serde(rename = "0.05%")]
    Bps5,
    #[serde(rename = "0.3%")]
    Bps30,
}

impl FeeTier {
    pub const ALL: [FeeTier; 2] = [FeeTier::Bps5, FeeTier::Bps30];

    /// Category label as it appears in the training data
    pub fn label(&self) -> &'static str {
        match self {
            FeeTier::Bps5 => "0.05%",
            FeeTier::Bps30 => "0.3%",
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeeTier {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0.05%" | "500" => Ok(FeeTier::Bps5),
            "0.3%" | "0.30%" | "3000" => Ok(FeeTier::Bps30),
            other => Err(PredictionError::InvalidInput {
                reason: format!(
                    "unknown fee tier '{}'; expected one of {}, {}",
                    other,
                    FeeTier::Bps5,
                    FeeTier::Bps30
                ),
            }),
        }
    }
}

/// A single raw cell of a feature record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(&'static str),
}

/// One row of model input, built fresh for every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub fee_tier: FeeTier,
    pub price_lower: f64,
    pub price_upper: f64,
    pub price_rng_width: f64,
    pub age: f64,
}

impl FeatureRecord {
    /// Builds the record and derives the range width. Bound ordering is the
    /// caller's responsibility.
    pub fn new(fee_tier: FeeTier, price_lower: f64, price_upper: f64, age: f64) -> Self {
        Self {
            fee_tier,
            price_lower,
            price_upper,
            price_rng_width: price_upper - price_lower,
            age,
        }
    }

    /// Looks up a column by its training name
    pub fn value(&self, column: &str) -> Option<FeatureValue> {
        match column {
            "fee_tier" => Some(FeatureValue::Categorical(self.fee_tier.label())),
            "price_lower" => Some(FeatureValue::Numeric(self.price_lower)),
            "price_upper" => Some(FeatureValue::Numeric(self.price_upper)),
            "price_rng_width" => Some(FeatureValue::Numeric(self.price_rng_width)),
            "age" => Some(FeatureValue::Numeric(self.age)),
            _ => None,
        }
    }

    /// Fails on NaN or infinite numeric cells
    pub fn ensure_finite(&self) -> Result<(), PredictionError> {
        for (name, v) in [
            ("price_lower", self.price_lower),
            ("price_upper", self.price_upper),
            ("price_rng_width", self.price_rng_width),
            ("age", self.age),
        ] {
            if !v.is_finite() {
                return Err(PredictionError::InvalidInput {
                    reason: format!("{} must be finite, got {}", name, v),
                });
            }
        }
        Ok(())
    }
}
