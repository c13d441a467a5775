// Chart description for comparison plots
pub mod chart;

// Actual vs. predicted tables
pub mod comparison;

// Domain-specific error types
pub mod errors;

// Features, targets and model artifacts
pub mod ml;

// Repository traits
pub mod repositories;

// Caller-side input checks
pub mod validation;
