use crate::domain::errors::PredictionError;
use crate::domain::ml::artifact::ModelArtifact;
use crate::domain::ml::target::Target;
use crate::domain::repositories::ModelRepository;
use crate::infrastructure::artifact_naming::ArtifactNaming;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reads model artifacts from disk on every call
#[derive(Debug, Clone)]
pub struct FsModelRepository {
    naming: ArtifactNaming,
}

impl FsModelRepository {
    pub fn new(naming: ArtifactNaming) -> Self {
        Self { naming }
    }

    pub fn artifact_path(&self, target: &Target) -> PathBuf {
        self.naming.model_path(target.artifact_name())
    }

    /// Decode and validate the artifact at `path`
    pub fn read_artifact(&self, target: &Target, path: &Path) -> Result<ModelArtifact, PredictionError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Model artifact for {} not found at {:?}", target, path);
                return Err(PredictionError::ArtifactNotFound {
                    target: target.to_string(),
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(PredictionError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PredictionError::MalformedArtifact {
                target: target.to_string(),
                reason: e.to_string(),
            }
        })?;

        if artifact.target != target.artifact_name() {
            return Err(PredictionError::MalformedArtifact {
                target: target.to_string(),
                reason: format!("file declares target '{}'", artifact.target),
            });
        }
        artifact
            .validate()
            .map_err(|reason| PredictionError::MalformedArtifact {
                target: target.to_string(),
                reason,
            })?;

        debug!(
            "Loaded {} model for {} from {:?}",
            artifact.regressor.kind(),
            target,
            path
        );
        Ok(artifact)
    }
}

impl ModelRepository for FsModelRepository {
    fn load_model(&self, target: &Target) -> Result<Arc<ModelArtifact>, PredictionError> {
        let path = self.artifact_path(target);
        self.read_artifact(target, &path).map(Arc::new)
    }
}
