//! Dashboard window configuration parsing from environment variables.

use anyhow::{Context, Result};

/// Dashboard environment configuration
#[derive(Debug, Clone)]
pub struct DashboardEnvConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for DashboardEnvConfig {
    fn default() -> Self {
        Self {
            title: "ROI-Prediction-Univ3-WBTC-WETH".to_string(),
            width: 1400.0,
            height: 900.0,
        }
    }
}

impl DashboardEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let dimension = |key: &str, default: f32| -> Result<f32> {
            match lookup(key) {
                Some(raw) => {
                    let value = raw
                        .trim()
                        .parse::<f32>()
                        .with_context(|| format!("Invalid {}: {}", key, raw))?;
                    anyhow::ensure!(value > 0.0, "{} must be positive, got {}", key, value);
                    Ok(value)
                }
                None => Ok(default),
            }
        };

        Ok(Self {
            title: lookup("DASHBOARD_TITLE").unwrap_or(defaults.title),
            width: dimension("DASHBOARD_WIDTH", defaults.width)?,
            height: dimension("DASHBOARD_HEIGHT", defaults.height)?,
        })
    }
}
