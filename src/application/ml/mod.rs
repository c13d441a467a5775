pub mod prediction_service;
pub mod predictor;
pub mod smartcore_predictor;
