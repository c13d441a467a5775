use crate::domain::errors::PredictionError;
use crate::domain::ml::artifact::ModelArtifact;
use crate::domain::ml::target::Target;
use crate::domain::repositories::ModelRepository;
use crate::infrastructure::fs_model_repository::FsModelRepository;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::SystemTime;
use tracing::{debug, info};

struct CacheEntry {
    modified: SystemTime,
    loaded_at: DateTime<Utc>,
    artifact: Arc<ModelArtifact>,
}

/// Keeps decoded artifacts in memory, keyed by target name.
///
/// An entry is reused while the artifact file's modification time is
/// unchanged; a different mtime triggers a reload, a deleted file evicts it.
pub struct CachedModelRepository {
    inner: FsModelRepository,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl CachedModelRepository {
    pub fn new(inner: FsModelRepository) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Drop the cached artifact for `target`, if any
    pub fn invalidate(&self, target: &Target) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(target.artifact_name()).is_some() {
            debug!("Invalidated cached model for {}", target);
        }
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When the cached artifact for `target` was decoded
    pub fn loaded_at(&self, target: &Target) -> Option<DateTime<Utc>> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(target.artifact_name())
            .map(|entry| entry.loaded_at)
    }
}

impl ModelRepository for CachedModelRepository {
    fn load_model(&self, target: &Target) -> Result<Arc<ModelArtifact>, PredictionError> {
        let path = self.inner.artifact_path(target);
        let modified = match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.invalidate(target);
                return Err(PredictionError::ArtifactNotFound {
                    target: target.to_string(),
                    path,
                });
            }
            Err(source) => return Err(PredictionError::Io { path, source }),
        };

        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = entries.get(target.artifact_name())
                && entry.modified == modified
            {
                return Ok(Arc::clone(&entry.artifact));
            }
        }

        let artifact = Arc::new(self.inner.read_artifact(target, &path)?);
        let loaded_at = Utc::now();
        info!(
            "Cached {} model for {} (loaded at {})",
            artifact.regressor.kind(),
            target,
            loaded_at.to_rfc3339()
        );

        self.entries.write().unwrap_or_else(|e| e.into_inner()).insert(
            target.artifact_name().to_string(),
            CacheEntry {
                modified,
                loaded_at,
                artifact: Arc::clone(&artifact),
            },
        );
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::artifact::RegressorModel;
    use crate::domain::ml::preprocessing::{ColumnTransform, Preprocessor};
    use crate::domain::ml::tree_ensemble::TreeEnsemble;
    use crate::infrastructure::artifact_naming::ArtifactNaming;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_test_dir() -> PathBuf {
        let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "rangecast_test_{}_{}_cache",
            std::process::id(),
            unique_id
        ));
        fs::create_dir_all(&temp_dir).expect("Failed to create test temp dir");
        temp_dir
    }

    fn write_artifact(naming: &ArtifactNaming, base_score: f64, modified: SystemTime) {
        let artifact = ModelArtifact::new(
            "roi",
            Preprocessor::new(vec![ColumnTransform::Passthrough {
                column: "age".to_string(),
            }]),
            RegressorModel::GradientBoosted(TreeEnsemble {
                base_score,
                trees: vec![],
            }),
        );
        let path = naming.model_path("roi");
        fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }

    fn base_score(artifact: &ModelArtifact) -> f64 {
        match &artifact.regressor {
            RegressorModel::GradientBoosted(e) => e.base_score,
            RegressorModel::RandomForest(_) => panic!("unexpected forest"),
        }
    }

    #[test]
    fn test_reuses_artifact_while_unchanged() {
        let dir = create_test_dir();
        let naming = ArtifactNaming::new(&dir);
        write_artifact(&naming, 0.05, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let cache = CachedModelRepository::new(FsModelRepository::new(naming));
        let first = cache.load_model(&Target::roi()).unwrap();
        let second = cache.load_model(&Target::roi()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.loaded_at(&Target::roi()).is_some());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_reloads_when_mtime_changes() {
        let dir = create_test_dir();
        let naming = ArtifactNaming::new(&dir);
        write_artifact(&naming, 0.05, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let cache = CachedModelRepository::new(FsModelRepository::new(naming.clone()));
        let first = cache.load_model(&Target::roi()).unwrap();

        write_artifact(&naming, 0.07, SystemTime::UNIX_EPOCH + Duration::from_secs(2_000));
        let second = cache.load_model(&Target::roi()).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(base_score(&second), 0.07);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_deleted_file_evicts_entry() {
        let dir = create_test_dir();
        let naming = ArtifactNaming::new(&dir);
        write_artifact(&naming, 0.05, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let cache = CachedModelRepository::new(FsModelRepository::new(naming.clone()));
        cache.load_model(&Target::roi()).unwrap();
        fs::remove_file(naming.model_path("roi")).unwrap();

        let err = cache.load_model(&Target::roi()).unwrap_err();
        assert!(matches!(err, PredictionError::ArtifactNotFound { .. }));
        assert!(cache.is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_explicit_invalidation() {
        let dir = create_test_dir();
        let naming = ArtifactNaming::new(&dir);
        write_artifact(&naming, 0.05, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let cache = CachedModelRepository::new(FsModelRepository::new(naming));
        let first = cache.load_model(&Target::roi()).unwrap();
        cache.invalidate(&Target::roi());
        assert!(cache.is_empty());

        let second = cache.load_model(&Target::roi()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));

        cache.clear();
        assert!(cache.is_empty());

        fs::remove_dir_all(dir).ok();
    }
}
