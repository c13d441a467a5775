use crate::domain::errors::InputValidationError;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::prediction_view_model::{
    PredictionOutcome, PredictionViewModel,
};
use eframe::egui;

pub fn render_prediction_output(ui: &mut egui::Ui, outcome: &PredictionOutcome) {
    match outcome {
        PredictionOutcome::Invalid(InputValidationError::InvertedRange { .. }) => {
            ui.label("Make sure your upper price limit > lower price limit!");
        }
        PredictionOutcome::Invalid(e) => {
            ui.label(egui::RichText::new(e.to_string()).color(DesignSystem::WARNING));
        }
        PredictionOutcome::Failed(message) => {
            Card::new().title("Output").show(ui, |ui| {
                ui.label(egui::RichText::new(message).color(DesignSystem::NEGATIVE));
            });
        }
        PredictionOutcome::Ready(row) => {
            Card::new().title("Output").show(ui, |ui| {
                egui::Grid::new("prediction_output_grid")
                    .num_columns(3)
                    .spacing([48.0, 8.0])
                    .show(ui, |ui| {
                        let cells = PredictionViewModel::cells(row);

                        ui.label("");
                        for cell in &cells {
                            ui.label(
                                egui::RichText::new(cell.label)
                                    .strong()
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        }
                        ui.end_row();

                        ui.label(egui::RichText::new("Prediction").strong());
                        for cell in &cells {
                            ui.label(
                                egui::RichText::new(&cell.text)
                                    .size(25.0)
                                    .strong()
                                    .color(cell.color),
                            );
                        }
                        ui.end_row();
                    });
            });
        }
    }
}
