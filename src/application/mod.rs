// Model inference
pub mod ml;

// Actual vs. prediction charts
pub mod comparison_renderer;

// Service wiring
pub mod system;
