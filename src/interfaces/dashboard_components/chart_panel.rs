use crate::domain::chart::format_percent;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::{render_color_bar, render_comparison_chart};
use crate::interfaces::components::metrics::render_status_pill;
use crate::interfaces::dashboard::ChartPanel;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Shown under the section heading; the repo ships synthetic artifacts in `artifacts/`
pub const BUNDLED_ARTIFACTS_NOTE: &str = "The models and test tables bundled in artifacts/ are placeholders. Point ARTIFACT_DIR at the trained artifacts to see real results.";

/// Renders the "unseen data" section: one card per evaluation chart, side by side
pub fn render_comparison_section(ui: &mut egui::Ui, panels: &[ChartPanel]) {
    ui.heading("Model performance on a set of data not used in training");
    ui.label(
        egui::RichText::new(BUNDLED_ARTIFACTS_NOTE)
            .size(11.0)
            .color(DesignSystem::TEXT_MUTED),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.columns(panels.len().max(1), |columns| {
        for (column, panel) in columns.iter_mut().zip(panels) {
            render_chart_card(column, panel);
        }
    });
}

fn render_chart_card(ui: &mut egui::Ui, panel: &ChartPanel) {
    match &panel.chart {
        Ok(spec) => {
            Card::new().title(&spec.heading).show(ui, |ui| {
                ui.horizontal(|ui| {
                    render_comparison_chart(ui, spec);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("Error")
                                .size(11.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        render_color_bar(ui, &spec.color_scale, spec.style.height as f32 * 0.6);
                    });
                });

                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.horizontal_wrapped(|ui| {
                    render_status_pill(
                        ui,
                        &format!(
                            "MAE {}",
                            format_percent(spec.summary.mean_absolute_error, 2)
                        ),
                        DesignSystem::ACCENT_PRIMARY,
                    );
                    render_status_pill(
                        ui,
                        &format!(
                            "RMSE {}",
                            format_percent(spec.summary.root_mean_squared_error, 2)
                        ),
                        DesignSystem::TEXT_SECONDARY,
                    );
                    render_status_pill(
                        ui,
                        &format!("{} rows", spec.summary.rows),
                        DesignSystem::TEXT_MUTED,
                    );
                });

                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(egui::RichText::new(panel.caption).color(DesignSystem::TEXT_SECONDARY));
            });
        }
        Err(message) => {
            Card::new()
                .title(panel.target.to_uppercase())
                .subtitle("Chart unavailable")
                .min_height(240.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(message).color(DesignSystem::WARNING));
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    ui.label(
                        egui::RichText::new(panel.caption).color(DesignSystem::TEXT_SECONDARY),
                    );
                });
        }
    }
}
