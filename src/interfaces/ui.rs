use crate::interfaces::dashboard::DashboardApp;
use crate::interfaces::dashboard_components::activity_feed::render_logs_panel;
use crate::interfaces::dashboard_components::chart_panel::render_comparison_section;
use crate::interfaces::dashboard_components::methodology::render_methodology;
use crate::interfaces::dashboard_components::prediction_form::render_prediction_form;
use crate::interfaces::dashboard_components::prediction_output::render_prediction_output;
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;
use std::time::Duration;

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 1. Pull logs & recompute on input change ---
        self.drain_logs();
        self.refresh_prediction();

        // --- 2. Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    "Machine Learning Predictions of ROI and Fee APR of UniV3 WBTC-WETH positions on Ethereum",
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} UTC", Utc::now().format("%H:%M:%S")))
                            .color(DesignSystem::TEXT_MUTED)
                            .small(),
                    );
                });
            });
        });

        // --- 3. Bottom: Logs ---
        render_logs_panel(self, ctx);

        // --- 4. Main content ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("dashboard_scroll")
                    .show(ui, |ui| {
                        render_comparison_section(ui, &self.charts);

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        ui.separator();

                        render_prediction_form(ui, &mut self.inputs);
                        ui.add_space(DesignSystem::SPACING_MEDIUM);
                        render_prediction_output(ui, &self.outcome);

                        ui.add_space(DesignSystem::SPACING_LARGE);
                        ui.separator();

                        render_methodology(ui);
                    });
            });

        // Keep the clock and log panel moving without input events
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}

/// Apply the dashboard theme once at start-up
pub fn configure_style(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });
}
