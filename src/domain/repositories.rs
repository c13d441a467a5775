//! Repository abstractions over artifact storage.
//!
//! Services depend on these traits; the filesystem implementations live in
//! `infrastructure`, and in-memory ones back the tests.

use crate::domain::comparison::ComparisonTable;
use crate::domain::errors::{ComparisonError, PredictionError};
use crate::domain::ml::artifact::ModelArtifact;
use crate::domain::ml::target::Target;
use std::sync::Arc;

/// Source of trained model artifacts, one per target
pub trait ModelRepository: Send + Sync {
    /// Load the artifact for `target`, or `ArtifactNotFound`
    fn load_model(&self, target: &Target) -> Result<Arc<ModelArtifact>, PredictionError>;
}

/// Source of precomputed actual/predicted tables, one per target
pub trait ComparisonRepository: Send + Sync {
    /// Load the table for `target` (original units), or `DataNotFound`
    fn load_table(&self, target: &str) -> Result<ComparisonTable, ComparisonError>;
}
