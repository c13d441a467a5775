pub mod components;
pub mod dashboard;
pub mod dashboard_components;
pub mod design_system;
pub mod ui;
pub mod view_models;
