use crate::domain::chart::ChartSpec;
use crate::domain::errors::ComparisonError;
use crate::domain::ml::target::Target;
use crate::domain::repositories::ComparisonRepository;
use std::sync::Arc;
use tracing::info;

/// Targets with a precomputed evaluation table, in original units
pub const COMPARISON_TARGETS: [&str; 2] = ["roi", "fee_apr"];

/// Turns precomputed comparison tables into scatter chart descriptions.
pub struct ComparisonRenderer {
    tables: Arc<dyn ComparisonRepository>,
}

impl ComparisonRenderer {
    pub fn new(tables: Arc<dyn ComparisonRepository>) -> Self {
        Self { tables }
    }

    /// Load the table for `target` and describe its actual-vs-prediction chart.
    ///
    /// `target` is in original units (`roi`, `fee_apr`), never the log form.
    pub fn render(&self, target: &str) -> Result<ChartSpec, ComparisonError> {
        let valid = Target::parse(target).ok_or_else(|| ComparisonError::InvalidTarget {
            target: target.to_string(),
        })?;

        let table = self.tables.load_table(valid.artifact_name())?;
        let chart = ChartSpec::from_table(&table);

        info!(
            "Rendered {} comparison chart: {} points, MAE {:.4}",
            chart.title, chart.summary.rows, chart.summary.mean_absolute_error
        );
        Ok(chart)
    }
}
