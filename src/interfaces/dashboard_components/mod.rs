pub mod activity_feed;
pub mod chart_panel;
pub mod methodology;
pub mod prediction_form;
pub mod prediction_output;
