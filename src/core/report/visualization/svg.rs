//! SVG geometry for the HTML line chart
//!
//! Maps chart points into a fixed-size plot area and precomputes every tick, grid
//! line, and marker so the HTML template only has to print them.

use crate::core::report::ChartSpec;
use std::fmt::Write;

/// Overall SVG size in pixels
const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 520.0;

/// Space left around the plot area for ticks and axis labels
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Y grid spacing in score points
const Y_GRID_STEP: f64 = 10.0;

/// Stroke width of horizontal grid lines
pub const Y_GRID_WIDTH: u32 = 3;

/// An axis tick: position along its axis and its label
#[derive(Debug, Clone, PartialEq)]
pub struct SvgTick {
    /// Pixel position (x for x ticks, y for y ticks)
    pub pos: String,
    /// Tick text
    pub label: String,
}

/// A point marker with its hover text
#[derive(Debug, Clone, PartialEq)]
pub struct SvgMarker {
    /// Pixel x
    pub cx: String,
    /// Pixel y
    pub cy: String,
    /// Tooltip, e.g. "average 65% -> 71%"
    pub label: String,
}

/// Precomputed SVG geometry for a chart
#[derive(Debug, Clone, PartialEq)]
pub struct SvgChart {
    /// SVG width
    pub width: String,
    /// SVG height
    pub height: String,
    /// Left edge of the plot area
    pub left: String,
    /// Right edge of the plot area
    pub right: String,
    /// Top edge of the plot area
    pub top: String,
    /// Bottom edge of the plot area
    pub bottom: String,
    /// Horizontal centre of the plot area (x label anchor)
    pub center_x: String,
    /// Vertical centre of the plot area (y label anchor)
    pub center_y: String,
    /// Path `d` attribute of the line
    pub path: String,
    /// One marker per point
    pub markers: Vec<SvgMarker>,
    /// One x tick per point
    pub x_ticks: Vec<SvgTick>,
    /// Y ticks every ten points, each with a grid line
    pub y_ticks: Vec<SvgTick>,
    /// Stroke width of the y grid
    pub grid_width: u32,
}

/// Linear map from a value range onto a pixel range
struct Scale {
    lo: f64,
    hi: f64,
    from: f64,
    to: f64,
}

impl Scale {
    fn new((lo, hi): (f64, f64), from: f64, to: f64) -> Self {
        // A single value still needs a span to map onto
        let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        };
        Self { lo, hi, from, to }
    }

    fn map(&self, value: f64) -> f64 {
        (value - self.lo) / (self.hi - self.lo) * (self.to - self.from) + self.from
    }
}

fn px(value: f64) -> String {
    format!("{value:.1}")
}

fn label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

impl SvgChart {
    /// Lay out the chart's points. An empty chart gives an empty plot with a 0-100 y axis.
    #[must_use]
    pub fn layout(spec: &ChartSpec) -> Self {
        let left = MARGIN_LEFT;
        let right = WIDTH - MARGIN_RIGHT;
        let top = MARGIN_TOP;
        let bottom = HEIGHT - MARGIN_BOTTOM;

        let x_bounds = spec.x_bounds().unwrap_or((0.0, 100.0));
        let (y_lo, y_hi) = spec.y_bounds().unwrap_or((0.0, 100.0));
        let y_bounds = (
            (y_lo / Y_GRID_STEP).floor() * Y_GRID_STEP,
            ((y_hi / Y_GRID_STEP).ceil() * Y_GRID_STEP).max(y_lo + Y_GRID_STEP),
        );

        let x_scale = Scale::new(x_bounds, left, right);
        let y_scale = Scale::new(y_bounds, bottom, top);

        let mut path = String::new();
        let mut markers = Vec::with_capacity(spec.points.len());
        let mut x_ticks = Vec::with_capacity(spec.points.len());
        for (i, &(x, y)) in spec.points.iter().enumerate() {
            let (cx, cy) = (px(x_scale.map(x)), px(y_scale.map(y)));
            let _ = write!(path, "{} {cx} {cy} ", if i == 0 { "M" } else { "L" });
            markers.push(SvgMarker {
                cx: cx.clone(),
                cy,
                label: format!("average {}% -> {}%", label(x), label(y)),
            });
            x_ticks.push(SvgTick {
                pos: cx,
                label: label(x),
            });
        }

        let mut y_ticks = Vec::new();
        let mut value = y_bounds.0;
        while value <= y_bounds.1 + f64::EPSILON {
            y_ticks.push(SvgTick {
                pos: px(y_scale.map(value)),
                label: label(value),
            });
            value += Y_GRID_STEP;
        }

        Self {
            width: px(WIDTH),
            height: px(HEIGHT),
            left: px(left),
            right: px(right),
            top: px(top),
            bottom: px(bottom),
            center_x: px((left + right) / 2.0),
            center_y: px((top + bottom) / 2.0),
            path: path.trim_end().to_string(),
            markers,
            x_ticks,
            y_ticks,
            grid_width: Y_GRID_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ChartTheme;

    fn spec(points: Vec<(f64, f64)>) -> ChartSpec {
        ChartSpec {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            points,
            theme: ChartTheme::default(),
        }
    }

    #[test]
    fn test_line_spans_plot_area() {
        let chart = SvgChart::layout(&spec(vec![(40.0, 50.0), (70.0, 65.0), (100.0, 80.0)]));

        assert!(chart.path.starts_with("M 80.0 450.0"));
        assert!(chart.path.ends_with("L 870.0 30.0"));
        assert_eq!(chart.markers.len(), 3);
        assert_eq!(chart.x_ticks[1].label, "70");
    }

    #[test]
    fn test_y_ticks_every_ten() {
        let chart = SvgChart::layout(&spec(vec![(40.0, 52.0), (100.0, 78.0)]));
        let labels: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["50", "60", "70", "80"]);
    }

    #[test]
    fn test_flat_line_still_has_range() {
        let chart = SvgChart::layout(&spec(vec![(40.0, 70.0), (100.0, 70.0)]));
        assert!(chart.y_ticks.len() >= 2);
        assert!(!chart.path.contains("NaN"));
    }

    #[test]
    fn test_single_point() {
        let chart = SvgChart::layout(&spec(vec![(60.0, 65.0)]));
        assert_eq!(chart.markers.len(), 1);
        assert!(!chart.path.contains("NaN"));
    }

    #[test]
    fn test_empty_spec() {
        let chart = SvgChart::layout(&spec(Vec::new()));
        assert!(chart.path.is_empty());
        assert_eq!(chart.y_ticks.len(), 11);
    }
}
