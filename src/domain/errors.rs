use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a prediction for a target
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model artifact not found for target '{target}' at {path:?}")]
    ArtifactNotFound { target: String, path: PathBuf },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Malformed model artifact for target '{target}': {reason}")]
    MalformedArtifact { target: String, reason: String },

    #[error("Model evaluation failed: {reason}")]
    Computation { reason: String },

    #[error("Failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading or describing a comparison table
#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("Comparison table not found for target '{target}' at {path:?}")]
    DataNotFound { target: String, path: PathBuf },

    #[error("Malformed comparison table for target '{target}': {reason}")]
    MalformedTable { target: String, reason: String },

    #[error("Comparison table for target '{target}' has no rows")]
    EmptyTable { target: String },

    #[error("Invalid target name '{target}'")]
    InvalidTarget { target: String },

    #[error("Failed to read comparison table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Caller-side validation of raw dashboard/CLI inputs
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputValidationError {
    #[error("Make sure your upper price limit > lower price limit! (lower {lower}, upper {upper})")]
    InvertedRange { lower: f64, upper: f64 },

    #[error("{field} = {value} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
