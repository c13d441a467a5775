//! In-memory repositories, used by tests and for wiring without a disk.

use crate::domain::comparison::{ComparisonRow, ComparisonTable};
use crate::domain::errors::{ComparisonError, PredictionError};
use crate::domain::ml::artifact::ModelArtifact;
use crate::domain::ml::target::Target;
use crate::domain::repositories::{ComparisonRepository, ModelRepository};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Default)]
pub struct InMemoryModelRepository {
    models: RwLock<HashMap<String, Arc<ModelArtifact>>>,
}

impl InMemoryModelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an artifact under its declared target name
    pub fn insert(&self, artifact: ModelArtifact) {
        self.models
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(artifact.target.clone(), Arc::new(artifact));
    }
}

impl ModelRepository for InMemoryModelRepository {
    fn load_model(&self, target: &Target) -> Result<Arc<ModelArtifact>, PredictionError> {
        self.models
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(target.artifact_name())
            .cloned()
            .ok_or_else(|| PredictionError::ArtifactNotFound {
                target: target.to_string(),
                path: PathBuf::from(format!("memory://{}", target)),
            })
    }
}

#[derive(Default)]
pub struct InMemoryComparisonRepository {
    tables: RwLock<HashMap<String, Vec<ComparisonRow>>>,
}

impl InMemoryComparisonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, target: impl Into<String>, rows: Vec<ComparisonRow>) {
        self.tables
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(target.into(), rows);
    }
}

impl ComparisonRepository for InMemoryComparisonRepository {
    fn load_table(&self, target: &str) -> Result<ComparisonTable, ComparisonError> {
        let rows = self
            .tables
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(target)
            .cloned()
            .ok_or_else(|| ComparisonError::DataNotFound {
                target: target.to_string(),
                path: PathBuf::from(format!("memory://{}", target)),
            })?;
        ComparisonTable::new(target, rows)
    }
}
