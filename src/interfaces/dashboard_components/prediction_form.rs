use crate::domain::ml::feature_registry::FeeTier;
use crate::domain::validation::{
    AGE_DAYS_RANGE, PRICE_LOWER_RANGE, PRICE_UPPER_RANGE, PredictionInputs,
};
use eframe::egui;

/// Four input columns: fee tier, lower bound, upper bound, holding period
pub fn render_prediction_form(ui: &mut egui::Ui, inputs: &mut PredictionInputs) {
    ui.heading("Predict by entering your own values");
    ui.add_space(8.0);

    ui.columns(4, |columns| {
        columns[0].label("Select fee-tier:");
        egui::ComboBox::from_id_salt("fee_tier_select")
            .selected_text(inputs.fee_tier.label())
            .show_ui(&mut columns[0], |ui| {
                for tier in FeeTier::ALL {
                    ui.selectable_value(&mut inputs.fee_tier, tier, tier.label());
                }
            });

        columns[1].label("Set Price Range - Min");
        columns[1].add(
            egui::DragValue::new(&mut inputs.price_lower)
                .range(PRICE_LOWER_RANGE)
                .speed(0.001)
                .fixed_decimals(3),
        );

        columns[2].label("Set Price Range - Max");
        columns[2].add(
            egui::DragValue::new(&mut inputs.price_upper)
                .range(PRICE_UPPER_RANGE)
                .speed(0.001)
                .fixed_decimals(3),
        );

        columns[3].label("How many days will you provide liquidity for?");
        columns[3].add(
            egui::DragValue::new(&mut inputs.age)
                .range(AGE_DAYS_RANGE)
                .speed(0.1)
                .fixed_decimals(1),
        );
    });
}
