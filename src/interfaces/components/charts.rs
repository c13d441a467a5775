use crate::domain::chart::{ChartSpec, DivergingScale, ScatterPoint};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

// Hover picks the nearest point within this fraction of the visible bounds
const HOVER_TOLERANCE: f64 = 0.03;

/// Actual vs. predicted scatter, one marker per row, coloured by residual
pub fn render_comparison_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
    let size = spec.style.width.min(spec.style.height) as f32;
    // plotly marker sizes are diameters in px; egui_plot wants a radius
    let radius = spec.style.marker_size / 3.0;
    let x_format = spec.x_axis.tick_format;
    let y_format = spec.y_axis.tick_format;

    let plot = Plot::new(format!("comparison_{}", spec.target))
        .width(size.min(ui.available_width()))
        .height(size)
        .data_aspect(1.0)
        .show_grid([spec.x_axis.show_grid, spec.y_axis.show_grid])
        .x_axis_label(spec.x_axis.label.clone())
        .y_axis_label(spec.y_axis.label.clone())
        .x_axis_formatter(move |mark, _range| x_format.format(mark.value))
        .y_axis_formatter(move |mark, _range| y_format.format(mark.value));

    let response = plot.show(ui, |plot_ui| {
        if let Some((lo, hi)) = value_span(&spec.points) {
            plot_ui.line(
                Line::new("Perfect prediction", PlotPoints::from(vec![[lo, lo], [hi, hi]]))
                    .color(DesignSystem::TEXT_MUTED)
                    .width(1.0),
            );
        }

        for point in &spec.points {
            plot_ui.points(
                Points::new(spec.title.clone(), vec![[point.actual, point.predicted]])
                    .radius(radius)
                    .filled(true)
                    .color(DesignSystem::chart_color(point.color, spec.style.opacity)),
            );
        }

        let bounds = plot_ui.plot_bounds();
        plot_ui.pointer_coordinate().and_then(|pointer| {
            nearest_point(
                &spec.points,
                [pointer.x, pointer.y],
                [bounds.width(), bounds.height()],
            )
        })
    });

    if let Some(index) = response.inner
        && let Some(point) = spec.points.get(index)
    {
        let lines = spec.hover_lines(point);
        response.response.on_hover_ui(|ui| {
            for line in lines {
                ui.label(line);
            }
        });
    }
}

/// Vertical gradient legend for the residual colour scale
pub fn render_color_bar(ui: &mut egui::Ui, scale: &DivergingScale, height: f32) {
    const STEPS: usize = 48;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, height), egui::Sense::hover());
    let step_height = rect.height() / STEPS as f32;

    for i in 0..STEPS {
        // top of the bar is the largest positive residual
        let t = 1.0 - (i as f64 + 0.5) / STEPS as f64;
        let value = scale.midpoint + (2.0 * t - 1.0) * scale.half_range;
        let top = rect.top() + i as f32 * step_height;
        let cell = egui::Rect::from_min_max(
            egui::pos2(rect.left(), top),
            egui::pos2(rect.right(), top + step_height + 0.5),
        );
        let rgb = scale.color(value);
        ui.painter()
            .rect_filled(cell, 0.0, egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b));
    }

    ui.painter().rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE),
        egui::StrokeKind::Inside,
    );
}

fn value_span(points: &[ScatterPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .flat_map(|p| [p.actual, p.predicted])
        .fold(None, |span, v| match span {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Index of the point closest to `pointer`, distances scaled by the visible extent
fn nearest_point(points: &[ScatterPoint], pointer: [f64; 2], extent: [f64; 2]) -> Option<usize> {
    let sx = if extent[0] > 0.0 { extent[0] } else { 1.0 };
    let sy = if extent[1] > 0.0 { extent[1] } else { 1.0 };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let dx = (p.actual - pointer[0]) / sx;
            let dy = (p.predicted - pointer[1]) / sy;
            (i, (dx * dx + dy * dy).sqrt())
        })
        .filter(|(_, d)| *d <= HOVER_TOLERANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
