use crate::domain::ml::feature_registry::FEATURE_NAMES;
use crate::domain::ml::preprocessing::Preprocessor;
use crate::domain::ml::tree_ensemble::TreeEnsemble;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fmt;

pub const FORMAT_VERSION: u32 = 1;

pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// A smartcore forest together with the design-row width it was fitted on
#[derive(Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub forest: ForestRegressor,
}

impl ForestModel {
    pub fn new(n_features: usize, forest: ForestRegressor) -> Self {
        Self { n_features, forest }
    }

    pub fn validate(&self, num_features: usize) -> Result<(), String> {
        if self.n_features != num_features {
            return Err(format!(
                "random forest expects {} features but preprocessing produces {}",
                self.n_features, num_features
            ));
        }
        Ok(())
    }
}

/// The trained model inside an artifact
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum RegressorModel {
    GradientBoosted(TreeEnsemble),
    RandomForest(Box<ForestModel>),
}

impl RegressorModel {
    pub fn kind(&self) -> &'static str {
        match self {
            RegressorModel::GradientBoosted(_) => "gradient_boosted",
            RegressorModel::RandomForest(_) => "random_forest",
        }
    }
}

impl fmt::Debug for RegressorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressorModel::GradientBoosted(ensemble) => f
                .debug_struct("GradientBoosted")
                .field("base_score", &ensemble.base_score)
                .field("trees", &ensemble.trees.len())
                .finish(),
            RegressorModel::RandomForest(model) => f
                .debug_struct("RandomForest")
                .field("n_features", &model.n_features)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    /// Cross-validated mean absolute error reported by training
    #[serde(default)]
    pub cv_mae: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A serialized, pre-trained model for one target.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub target: String,
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    pub features: Vec<String>,
    pub preprocessing: Preprocessor,
    pub regressor: RegressorModel,
    #[serde(default)]
    pub metadata: ArtifactMetadata,
}

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

impl ModelArtifact {
    pub fn new(
        target: impl Into<String>,
        preprocessing: Preprocessor,
        regressor: RegressorModel,
    ) -> Self {
        Self {
            target: target.into(),
            format_version: FORMAT_VERSION,
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            preprocessing,
            regressor,
            metadata: ArtifactMetadata::default(),
        }
    }

    /// Structural checks run once after decoding
    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {} (expected {})",
                self.format_version, FORMAT_VERSION
            ));
        }
        if self.features.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            return Err(format!(
                "feature columns {:?} do not match {:?}",
                self.features, FEATURE_NAMES
            ));
        }
        self.preprocessing.validate()?;

        let width = self.preprocessing.output_width();
        match &self.regressor {
            RegressorModel::GradientBoosted(ensemble) => ensemble.validate(width),
            RegressorModel::RandomForest(model) => model.validate(width),
        }
    }
}
