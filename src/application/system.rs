use crate::application::comparison_renderer::ComparisonRenderer;
use crate::application::ml::prediction_service::PredictionService;
use crate::config::Config;
use crate::domain::repositories::{ComparisonRepository, ModelRepository};
use crate::infrastructure::fs_comparison_repository::FsComparisonRepository;
use crate::infrastructure::fs_model_repository::FsModelRepository;
use crate::infrastructure::model_cache::CachedModelRepository;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Wired services shared by the dashboard and the CLI
pub struct Application {
    pub config: Config,
    pub predictions: PredictionService,
    pub comparisons: ComparisonRenderer,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        let naming = config.artifacts.naming();
        if !naming.dir().is_dir() {
            warn!(
                "Artifact directory {:?} does not exist; predictions and charts will fail",
                naming.dir()
            );
        }

        let fs_models = FsModelRepository::new(naming.clone());
        let models: Arc<dyn ModelRepository> = if config.artifacts.model_cache_enabled {
            Arc::new(CachedModelRepository::new(fs_models))
        } else {
            Arc::new(fs_models)
        };

        let tables: Arc<dyn ComparisonRepository> = Arc::new(
            FsComparisonRepository::new(naming.clone())
                .with_prediction_column(config.artifacts.prediction_column.clone()),
        );

        info!(
            "Artifacts: {:?} ({}-{}, models '{}', tables '{}', cache {})",
            naming.dir(),
            naming.network,
            naming.pair,
            naming.model_kind,
            naming.predictions_kind,
            if config.artifacts.model_cache_enabled { "on" } else { "off" }
        );

        Ok(Self::from_parts(config, models, tables))
    }

    pub fn from_parts(
        config: Config,
        models: Arc<dyn ModelRepository>,
        tables: Arc<dyn ComparisonRepository>,
    ) -> Self {
        Self {
            config,
            predictions: PredictionService::new(models),
            comparisons: ComparisonRenderer::new(tables),
        }
    }
}
