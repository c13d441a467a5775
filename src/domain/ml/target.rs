use serde::{Deserialize, Serialize};
use std::fmt;

/// Artifact name of the ROI model
pub const ROI: &str = "roi";
/// Artifact name of the fee APR model, trained on `log1p(fee_apr)`
pub const LOG1P_FEE_APR: &str = "log1p_fee_apr";

const LOG1P_PREFIX: &str = "log1p_";

/// How a model's raw output maps back to the target's original units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTransform {
    Identity,
    Log1p,
}

impl TargetTransform {
    /// Undoes the encoding applied to the target during training
    pub fn inverse(&self, raw: f64) -> f64 {
        match self {
            TargetTransform::Identity => raw,
            TargetTransform::Log1p => raw.exp() - 1.0,
        }
    }
}

/// A prediction target, parsed once from its artifact name.
///
/// The `log1p_` marker in the name is turned into an explicit
/// [`TargetTransform`] here; nothing downstream inspects the string again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    name: String,
    transform: TargetTransform,
}

impl Target {
    /// Parses an artifact name such as `roi` or `log1p_fee_apr`.
    ///
    /// Returns `None` for empty names or names containing anything but
    /// ASCII lowercase letters, digits and underscores, since the name is
    /// embedded in file paths.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return None;
        }

        let transform = match name.strip_prefix(LOG1P_PREFIX) {
            Some(base) if !base.is_empty() => TargetTransform::Log1p,
            _ => TargetTransform::Identity,
        };

        Some(Self {
            name: name.to_string(),
            transform,
        })
    }

    pub fn roi() -> Self {
        Self {
            name: ROI.to_string(),
            transform: TargetTransform::Identity,
        }
    }

    pub fn log1p_fee_apr() -> Self {
        Self {
            name: LOG1P_FEE_APR.to_string(),
            transform: TargetTransform::Log1p,
        }
    }

    /// Name used for the model artifact
    pub fn artifact_name(&self) -> &str {
        &self.name
    }

    /// Name of the quantity in original units (`log1p_fee_apr` -> `fee_apr`)
    pub fn base_name(&self) -> &str {
        match self.transform {
            TargetTransform::Log1p => &self.name[LOG1P_PREFIX.len()..],
            TargetTransform::Identity => &self.name,
        }
    }

    pub fn transform(&self) -> TargetTransform {
        self.transform
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
