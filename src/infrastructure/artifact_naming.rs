use std::path::{Path, PathBuf};

/// File naming convention for model artifacts and comparison tables.
///
/// `<network>-<pair>-<kind>-<target>.<ext>`, e.g.
/// `mainnet-wbtc-weth-xgbmod-log1p_fee_apr.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    pub dir: PathBuf,
    pub network: String,
    pub pair: String,
    pub model_kind: String,
    pub predictions_kind: String,
}

impl ArtifactNaming {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    fn file(&self, kind: &str, target: &str, extension: &str) -> PathBuf {
        self.dir.join(format!(
            "{}-{}-{}-{}.{}",
            self.network, self.pair, kind, target, extension
        ))
    }

    pub fn model_path(&self, target: &str) -> PathBuf {
        self.file(&self.model_kind, target, "json")
    }

    pub fn table_path(&self, target: &str) -> PathBuf {
        self.file(&self.predictions_kind, target, "csv")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("artifacts"),
            network: "mainnet".to_string(),
            pair: "wbtc-weth".to_string(),
            model_kind: "xgbmod".to_string(),
            predictions_kind: "xgbpred".to_string(),
        }
    }
}
