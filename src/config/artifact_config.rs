//! Artifact storage configuration parsing from environment variables.
//!
//! This module handles where model artifacts and comparison tables live and
//! how their file names are built.

use crate::infrastructure::artifact_naming::ArtifactNaming;
use crate::infrastructure::fs_comparison_repository::DEFAULT_PREDICTION_COLUMN;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Artifact storage environment configuration
#[derive(Debug, Clone)]
pub struct ArtifactEnvConfig {
    pub artifact_dir: PathBuf,
    pub network: String,
    pub pair: String,
    pub model_kind: String,
    pub predictions_kind: String,
    pub prediction_column: String,
    pub model_cache_enabled: bool,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        let naming = ArtifactNaming::default();
        Self {
            artifact_dir: naming.dir,
            network: naming.network,
            pair: naming.pair,
            model_kind: naming.model_kind,
            predictions_kind: naming.predictions_kind,
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
            model_cache_enabled: true,
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let string = |key: &str, default: String| lookup(key).unwrap_or(default);

        let model_cache_enabled = match lookup("MODEL_CACHE_ENABLED") {
            Some(raw) => raw
                .trim()
                .to_lowercase()
                .parse::<bool>()
                .with_context(|| format!("Invalid MODEL_CACHE_ENABLED: {}", raw))?,
            None => defaults.model_cache_enabled,
        };

        Ok(Self {
            artifact_dir: lookup("ARTIFACT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.artifact_dir),
            network: string("NETWORK", defaults.network),
            pair: string("PAIR", defaults.pair),
            model_kind: string("MODEL_KIND", defaults.model_kind),
            predictions_kind: string("PREDICTIONS_KIND", defaults.predictions_kind),
            prediction_column: string("PREDICTION_COLUMN", defaults.prediction_column),
            model_cache_enabled,
        })
    }

    pub fn naming(&self) -> ArtifactNaming {
        ArtifactNaming {
            dir: self.artifact_dir.clone(),
            network: self.network.clone(),
            pair: self.pair.clone(),
            model_kind: self.model_kind.clone(),
            predictions_kind: self.predictions_kind.clone(),
        }
    }
}
