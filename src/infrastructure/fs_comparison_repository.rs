use crate::domain::comparison::{ComparisonRow, ComparisonTable};
use crate::domain::errors::ComparisonError;
use crate::domain::repositories::ComparisonRepository;
use crate::infrastructure::artifact_naming::ArtifactNaming;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_PREDICTION_COLUMN: &str = "xgb_pred";

/// Reads comparison tables from CSV files.
///
/// The actual values live in the column named after the target, the
/// predictions in `prediction_column`. Other columns are ignored.
#[derive(Debug, Clone)]
pub struct FsComparisonRepository {
    naming: ArtifactNaming,
    prediction_column: String,
}

impl FsComparisonRepository {
    pub fn new(naming: ArtifactNaming) -> Self {
        Self {
            naming,
            prediction_column: DEFAULT_PREDICTION_COLUMN.to_string(),
        }
    }

    pub fn with_prediction_column(mut self, column: impl Into<String>) -> Self {
        self.prediction_column = column.into();
        self
    }

    fn read_table(&self, target: &str, path: &Path) -> Result<ComparisonTable, ComparisonError> {
        let malformed = |reason: String| ComparisonError::MalformedTable {
            target: target.to_string(),
            reason,
        };

        let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!("Comparison table for {} not found at {:?}", target, path);
                ComparisonError::DataNotFound {
                    target: target.to_string(),
                    path: path.to_path_buf(),
                }
            }
            csv::ErrorKind::Io(source) => ComparisonError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => malformed(format!("{:?}", other)),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| malformed(e.to_string()))?
            .clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| malformed(format!("missing column '{}'", name)))
        };
        let actual_idx = column(target)?;
        let predicted_idx = column(&self.prediction_column)?;

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| malformed(e.to_string()))?;
            let cell = |idx: usize| -> Result<f64, ComparisonError> {
                let raw = record.get(idx).unwrap_or("").trim();
                raw.parse::<f64>().map_err(|_| {
                    malformed(format!(
                        "row {}: cannot parse '{}' in column '{}'",
                        line + 1,
                        raw,
                        &headers[idx]
                    ))
                })
            };
            rows.push(ComparisonRow::new(cell(actual_idx)?, cell(predicted_idx)?));
        }

        debug!("Read {} comparison rows for {} from {:?}", rows.len(), target, path);
        ComparisonTable::new(target, rows)
    }
}

impl ComparisonRepository for FsComparisonRepository {
    fn load_table(&self, target: &str) -> Result<ComparisonTable, ComparisonError> {
        let path = self.naming.table_path(target);
        self.read_table(target, &path)
    }
}
