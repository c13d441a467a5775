use crate::domain::errors::ComparisonError;
use serde::Serialize;
use statrs::statistics::{Data, Distribution};

/// One held-out observation and the model's prediction for it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub actual: f64,
    pub predicted: f64,
}

impl ComparisonRow {
    pub fn new(actual: f64, predicted: f64) -> Self {
        Self { actual, predicted }
    }

    /// `actual - predicted`
    pub fn residual(&self) -> f64 {
        self.actual - self.predicted
    }
}

/// Error statistics over a comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub rows: usize,
    pub mean_absolute_error: f64,
    pub root_mean_squared_error: f64,
    /// Mean residual; positive means the model under-predicts
    pub bias: f64,
    pub residual_std: Option<f64>,
}

/// Precomputed actual/predicted pairs for one target. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    target: String,
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn new(target: impl Into<String>, rows: Vec<ComparisonRow>) -> Result<Self, ComparisonError> {
        let target = target.into();
        if rows.is_empty() {
            return Err(ComparisonError::EmptyTable { target });
        }
        Ok(Self { target, rows })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Residual column, row-aligned with [`ComparisonTable::rows`]
    pub fn residuals(&self) -> Vec<f64> {
        self.rows.iter().map(ComparisonRow::residual).collect()
    }

    /// Largest absolute residual, used to make colour scales symmetric
    pub fn max_abs_residual(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.residual().abs())
            .fold(0.0, f64::max)
    }

    pub fn summary(&self) -> ComparisonSummary {
        let residuals = self.residuals();
        let abs: Vec<f64> = residuals.iter().map(|r| r.abs()).collect();
        let squared: Vec<f64> = residuals.iter().map(|r| r * r).collect();

        let residual_data = Data::new(residuals);
        let bias = residual_data.mean().unwrap_or(0.0);
        let residual_std = residual_data.std_dev().filter(|s| s.is_finite());

        ComparisonSummary {
            rows: self.rows.len(),
            mean_absolute_error: Data::new(abs).mean().unwrap_or(0.0),
            root_mean_squared_error: Data::new(squared).mean().unwrap_or(0.0).sqrt(),
            bias,
            residual_std,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_is_actual_minus_predicted() {
        let table =
            ComparisonTable::new("roi", vec![ComparisonRow::new(0.10, 0.08)]).unwrap();
        assert_eq!(table.residuals(), vec![0.10 - 0.08]);
        assert!((table.residuals()[0] - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_residuals_keep_row_order_and_sign() {
        let rows = vec![
            ComparisonRow::new(0.05, 0.07),
            ComparisonRow::new(-0.10, -0.12),
            ComparisonRow::new(0.30, 0.30),
        ];
        let table = ComparisonTable::new("roi", rows.clone()).unwrap();
        let residuals = table.residuals();

        for (row, residual) in rows.iter().zip(&residuals) {
            assert_eq!(*residual, row.actual - row.predicted);
        }
        assert!(residuals[0] < 0.0);
        assert!(residuals[1] > 0.0);
        assert_eq!(residuals[2], 0.0);
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let err = ComparisonTable::new("fee_apr", vec![]).unwrap_err();
        assert!(matches!(err, ComparisonError::EmptyTable { .. }));
    }

    #[test]
    fn test_summary_statistics() {
        let table = ComparisonTable::new(
            "roi",
            vec![ComparisonRow::new(1.0, 0.0), ComparisonRow::new(0.0, 3.0)],
        )
        .unwrap();
        let summary = table.summary();

        assert_eq!(summary.rows, 2);
        assert!((summary.mean_absolute_error - 2.0).abs() < 1e-12);
        assert!((summary.root_mean_squared_error - 5.0_f64.sqrt()).abs() < 1e-12);
        assert!((summary.bias + 1.0).abs() < 1e-12);
        assert_eq!(table.max_abs_residual(), 3.0);
    }
}
