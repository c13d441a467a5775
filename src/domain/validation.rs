//! Caller-side checks on raw position inputs.
//!
//! The predictor itself does not validate bound ordering; every caller
//! (dashboard, CLI) runs [`PredictionInputs::validate`] first.

use crate::domain::errors::InputValidationError;
use crate::domain::ml::feature_registry::{FeatureRecord, FeeTier};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Lower price bound range (BTC/ETH) seen in training
pub const PRICE_LOWER_RANGE: RangeInclusive<f64> = 5.0..=17.0;
/// Upper price bound range (BTC/ETH) seen in training
pub const PRICE_UPPER_RANGE: RangeInclusive<f64> = 12.0..=50.0;
/// Position age range in days seen in training
pub const AGE_DAYS_RANGE: RangeInclusive<f64> = 0.5..=564.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInputs {
    pub fee_tier: FeeTier,
    pub price_lower: f64,
    pub price_upper: f64,
    pub age: f64,
}

impl Default for PredictionInputs {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::Bps5,
            price_lower: 12.0,
            price_upper: 14.0,
            age: 7.0,
        }
    }
}

impl PredictionInputs {
    /// Checks finiteness, training ranges and `price_upper > price_lower`,
    /// then builds the feature record.
    pub fn validate(&self) -> Result<FeatureRecord, InputValidationError> {
        check_field("price_lower", self.price_lower, &PRICE_LOWER_RANGE)?;
        check_field("price_upper", self.price_upper, &PRICE_UPPER_RANGE)?;
        check_field("age", self.age, &AGE_DAYS_RANGE)?;

        if self.price_upper <= self.price_lower {
            return Err(InputValidationError::InvertedRange {
                lower: self.price_lower,
                upper: self.price_upper,
            });
        }

        Ok(FeatureRecord::new(
            self.fee_tier,
            self.price_lower,
            self.price_upper,
            self.age,
        ))
    }
}

fn check_field(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), InputValidationError> {
    if !value.is_finite() {
        return Err(InputValidationError::NotFinite { field });
    }
    if !range.contains(&value) {
        return Err(InputValidationError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let record = PredictionInputs::default().validate().unwrap();
        assert_eq!(record.price_rng_width, 2.0);
        assert_eq!(record.fee_tier, FeeTier::Bps5);
    }

    #[test]
    fn test_inverted_and_equal_ranges_rejected() {
        let inputs = PredictionInputs {
            price_lower: 14.0,
            price_upper: 13.0,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InputValidationError::InvertedRange {
                lower: 14.0,
                upper: 13.0
            })
        );

        let equal = PredictionInputs {
            price_lower: 13.0,
            price_upper: 13.0,
            ..Default::default()
        };
        assert!(matches!(
            equal.validate(),
            Err(InputValidationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_out_of_training_range() {
        let inputs = PredictionInputs {
            age: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InputValidationError::OutOfRange { field: "age", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let inputs = PredictionInputs {
            price_lower: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InputValidationError::NotFinite {
                field: "price_lower"
            })
        );
    }
}
