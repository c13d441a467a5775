//! Configuration module for rangecast.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: artifact storage and dashboard window.

mod artifact_config;
mod dashboard_config;

pub use artifact_config::ArtifactEnvConfig;
pub use dashboard_config::DashboardEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub artifacts: ArtifactEnvConfig,
    pub dashboard: DashboardEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let artifacts =
            ArtifactEnvConfig::from_lookup(&lookup).context("Failed to load artifact config")?;
        let dashboard =
            DashboardEnvConfig::from_lookup(&lookup).context("Failed to load dashboard config")?;

        Ok(Self {
            artifacts,
            dashboard,
        })
    }
}
