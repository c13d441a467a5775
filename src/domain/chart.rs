//! Renderer-agnostic description of the actual-vs-prediction scatter chart.

use crate::domain::comparison::{ComparisonSummary, ComparisonTable};
use serde::Serialize;

pub const BACKGROUND_HEX: &str = "#0E1117";
pub const PREDICTION_AXIS_LABEL: &str = "Prediction";

/// IceFire diverging palette, evenly spaced from most negative to most positive
const ICEFIRE_STOPS: [Rgb; 17] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x00, 0x1f, 0x4d),
    Rgb::new(0x00, 0x37, 0x86),
    Rgb::new(0x0e, 0x58, 0xa8),
    Rgb::new(0x21, 0x7e, 0xb8),
    Rgb::new(0x30, 0xa4, 0xca),
    Rgb::new(0x54, 0xc8, 0xdf),
    Rgb::new(0x9b, 0xe4, 0xef),
    Rgb::new(0xe1, 0xe9, 0xd1),
    Rgb::new(0xf3, 0xd5, 0x73),
    Rgb::new(0xe7, 0xb0, 0x00),
    Rgb::new(0xda, 0x82, 0x00),
    Rgb::new(0xc6, 0x54, 0x00),
    Rgb::new(0xac, 0x23, 0x01),
    Rgb::new(0x82, 0x00, 0x00),
    Rgb::new(0x4c, 0x00, 0x00),
    Rgb::new(0x00, 0x00, 0x00),
];

/// `fee_apr` -> `FEE APR`
pub fn display_title(target: &str) -> String {
    target.replace('_', " ").to_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TickFormat {
    /// Proportion rendered as a percentage (`0.05` -> `5%`)
    Percent { decimals: usize },
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Percent { decimals } => format_percent(value, *decimals),
        }
    }
}

/// `0.1234` with 2 decimals -> `12.34%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub label: String,
    pub tick_format: TickFormat,
    pub show_grid: bool,
}

/// Colour scale centred on `midpoint`, symmetric out to `half_range`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivergingScale {
    pub name: &'static str,
    pub midpoint: f64,
    pub half_range: f64,
}

impl DivergingScale {
    pub fn icefire(midpoint: f64, half_range: f64) -> Self {
        Self {
            name: "IceFire",
            midpoint,
            half_range: half_range.abs(),
        }
    }

    /// Position on the palette in `[0, 1]`; the midpoint maps to 0.5
    pub fn position(&self, value: f64) -> f64 {
        if self.half_range == 0.0 || !value.is_finite() {
            return 0.5;
        }
        (0.5 + 0.5 * (value - self.midpoint) / self.half_range).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Rgb {
        let scaled = self.position(value) * (ICEFIRE_STOPS.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(ICEFIRE_STOPS.len() - 2);
        ICEFIRE_STOPS[lower].lerp(ICEFIRE_STOPS[lower + 1], scaled - lower as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub actual: f64,
    pub predicted: f64,
    pub residual: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartStyle {
    pub background: &'static str,
    pub opacity: f32,
    pub marker_size: f32,
    pub width: u32,
    pub height: u32,
    pub font_size: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND_HEX,
            opacity: 0.5,
            marker_size: 15.0,
            width: 600,
            height: 600,
            font_size: 18.0,
        }
    }
}

/// Scatter of actual (x) against predicted (y), coloured by residual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub target: String,
    pub title: String,
    pub heading: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub color_scale: DivergingScale,
    pub points: Vec<ScatterPoint>,
    pub summary: ComparisonSummary,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn from_table(table: &ComparisonTable) -> Self {
        let title = display_title(table.target());
        let percent = TickFormat::Percent { decimals: 0 };
        let color_scale = DivergingScale::icefire(0.0, table.max_abs_residual());

        let points = table
            .rows()
            .iter()
            .map(|row| {
                let residual = row.residual();
                ScatterPoint {
                    actual: row.actual,
                    predicted: row.predicted,
                    residual,
                    color: color_scale.color(residual),
                }
            })
            .collect();

        Self {
            target: table.target().to_string(),
            heading: format!("{} Predictions vs. Actuals", title),
            x_axis: AxisSpec {
                label: title.clone(),
                tick_format: percent,
                show_grid: false,
            },
            y_axis: AxisSpec {
                label: PREDICTION_AXIS_LABEL.to_string(),
                tick_format: percent,
                show_grid: false,
            },
            title,
            color_scale,
            points,
            summary: table.summary(),
            style: ChartStyle::default(),
        }
    }

    /// Tooltip lines for one point, with two-decimal percentages
    pub fn hover_lines(&self, point: &ScatterPoint) -> [String; 3] {
        [
            format!("{}: {}", self.title, format_percent(point.actual, 2)),
            format!("{}: {}", PREDICTION_AXIS_LABEL, format_percent(point.predicted, 2)),
            format!("Error: {}", format_percent(point.residual, 2)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::ComparisonRow;

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("fee_apr"), "FEE APR");
        assert_eq!(display_title("roi"), "ROI");
        assert_eq!(display_title("log1p_fee_apr"), "LOG1P FEE APR");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.05, 2), "5.00%");
        assert_eq!(format_percent(-0.2559, 2), "-25.59%");
        assert_eq!(TickFormat::Percent { decimals: 0 }.format(0.3), "30%");
    }

    #[test]
    fn test_diverging_scale_is_centred() {
        let scale = DivergingScale::icefire(0.0, 0.2);
        assert_eq!(scale.position(0.0), 0.5);
        assert_eq!(scale.position(0.2), 1.0);
        assert_eq!(scale.position(-0.2), 0.0);
        assert_eq!(scale.position(5.0), 1.0);
        assert_eq!(scale.color(0.0), ICEFIRE_STOPS[8]);
        assert_eq!(scale.color(0.0).to_hex(), "#e1e9d1");
        assert_eq!(scale.color(-0.2), ICEFIRE_STOPS[0]);
    }

    #[test]
    fn test_zero_range_scale_maps_to_midpoint() {
        let scale = DivergingScale::icefire(0.0, 0.0);
        assert_eq!(scale.position(1.0), 0.5);
    }

    #[test]
    fn test_chart_from_table() {
        let table = ComparisonTable::new(
            "fee_apr",
            vec![ComparisonRow::new(0.10, 0.08), ComparisonRow::new(0.40, 0.50)],
        )
        .unwrap();
        let chart = ChartSpec::from_table(&table);

        assert_eq!(chart.title, "FEE APR");
        assert_eq!(chart.heading, "FEE APR Predictions vs. Actuals");
        assert_eq!(chart.x_axis.label, "FEE APR");
        assert_eq!(chart.y_axis.label, "Prediction");
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].residual, 0.10 - 0.08);
        assert_eq!(chart.color_scale.midpoint, 0.0);
        assert_eq!(chart.points[1].color, ICEFIRE_STOPS[0]);

        let hover = chart.hover_lines(&chart.points[0]);
        assert_eq!(hover[0], "FEE APR: 10.00%");
        assert_eq!(hover[1], "Prediction: 8.00%");
    }
}
