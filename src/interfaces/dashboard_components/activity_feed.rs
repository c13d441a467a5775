use crate::interfaces::dashboard::DashboardApp;
use eframe::egui;

fn line_color(line: &str) -> egui::Color32 {
    if line.contains("ERROR") {
        egui::Color32::from_rgb(255, 80, 80)
    } else if line.contains("WARN") {
        egui::Color32::from_rgb(255, 255, 100)
    } else {
        egui::Color32::from_rgb(150, 150, 150)
    }
}

/// Bottom panel with the tracing output captured for the UI
pub fn render_logs_panel(dashboard: &mut DashboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("logs_panel")
        .resizable(true)
        .default_height(160.0)
        .min_height(30.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("System Logs").size(14.0));
                ui.add_space(8.0);
                let toggle = if dashboard.logs_collapsed { "Show" } else { "Hide" };
                if ui.small_button(toggle).clicked() {
                    dashboard.logs_collapsed = !dashboard.logs_collapsed;
                }
            });

            if dashboard.logs_collapsed {
                return;
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("logs_scroll")
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if dashboard.logs.is_empty() {
                        ui.label(
                            egui::RichText::new("No activity yet")
                                .color(egui::Color32::from_gray(120))
                                .italics(),
                        );
                    }
                    for line in &dashboard.logs {
                        ui.label(
                            egui::RichText::new(line)
                                .monospace()
                                .size(11.0)
                                .color(line_color(line)),
                        );
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_color_by_level() {
        assert_eq!(line_color("  WARN artifact dir missing"), egui::Color32::from_rgb(255, 255, 100));
        assert_eq!(line_color("ERROR boom"), egui::Color32::from_rgb(255, 80, 80));
        assert_eq!(line_color(" INFO ready"), egui::Color32::from_rgb(150, 150, 150));
    }
}
