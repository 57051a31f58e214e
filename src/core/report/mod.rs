//! Chart rendering for score projections
//!
//! The forecast code only produces `(average, final score)` points. This module
//! turns them into a [`ChartSpec`] and renders it to a file in one of the
//! supported [`ChartFormat`]s.

pub mod formats;
pub mod visualization;

use crate::core::forecast::ProjectionPoint;
use crate::core::models::DegreeScore;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{ChartFormat, HtmlChartRenderer, MarkdownChartRenderer};
pub use visualization::{MermaidGenerator, SvgChart};

/// Colours and font for rendered charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Page and plot background
    pub background: String,
    /// Horizontal grid lines
    pub grid_color: String,
    /// Titles, labels, tick text
    pub text_color: String,
    /// Projection line and markers
    pub line_color: String,
    /// CSS font family
    pub font_family: String,
    /// Base font size in pixels
    pub font_size: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "#262628".to_string(),
            grid_color: "rgba(255,255,255,0.15)".to_string(),
            text_color: "rgba(255,255,255,0.4)".to_string(),
            line_color: "#4fa3e0".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 15,
        }
    }
}

/// Everything a renderer needs: points, labels, and styling
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart title
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// Points in x order
    pub points: Vec<(f64, f64)>,
    /// Styling
    pub theme: ChartTheme,
}

impl ChartSpec {
    /// Chart of final degree score against the average over remaining work.
    /// The title carries the current degree score.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn projection(
        degree_name: &str,
        current: &DegreeScore,
        series: &[ProjectionPoint],
        theme: ChartTheme,
    ) -> Self {
        let status = if current.is_projected {
            " (projected)"
        } else {
            ""
        };
        Self {
            title: format!(
                "{degree_name}: current score {}%{status}",
                current.score
            ),
            x_label: "Average over remaining work (%)".to_string(),
            y_label: "Final degree score (%)".to_string(),
            points: series
                .iter()
                .map(|p| (p.average, p.final_score as f64))
                .collect(),
            theme,
        }
    }

    /// Smallest and largest x, or `None` for an empty chart
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|p| p.0))
    }

    /// Smallest and largest y, or `None` for an empty chart
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|p| p.1))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Trait for chart renderers
pub trait ChartRenderer {
    /// Render the chart to a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, spec: &ChartSpec) -> Result<String, Box<dyn Error>>;

    /// Render the chart and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, spec: &ChartSpec, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(spec)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
