//! Mermaid diagram generator for projection charts
//!
//! Generates Mermaid `xychart-beta` syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::report::ChartSpec;
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a fenced Mermaid line chart for the chart's points.
    ///
    /// The y axis runs from the nearest multiple of ten below the lowest score to
    /// the nearest above the highest.
    #[must_use]
    pub fn generate_xy_chart(spec: &ChartSpec) -> String {
        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"{}\"", Self::sanitize_label(&spec.title));

        let x_values: Vec<String> = spec
            .points
            .iter()
            .map(|(x, _)| Self::format_number(*x))
            .collect();
        let _ = writeln!(
            output,
            "    x-axis \"{}\" [{}]",
            Self::sanitize_label(&spec.x_label),
            x_values.join(", ")
        );

        let (y_min, y_max) = spec.y_bounds().unwrap_or((0.0, 100.0));
        let _ = writeln!(
            output,
            "    y-axis \"{}\" {} --> {}",
            Self::sanitize_label(&spec.y_label),
            Self::format_number((y_min / 10.0).floor() * 10.0),
            Self::format_number((y_max / 10.0).ceil().max(1.0) * 10.0)
        );

        let y_values: Vec<String> = spec
            .points
            .iter()
            .map(|(_, y)| Self::format_number(*y))
            .collect();
        let _ = writeln!(output, "    line [{}]", y_values.join(", "));

        output.push_str("```\n");
        output
    }

    /// Double quotes would end a Mermaid label early
    fn sanitize_label(label: &str) -> String {
        label.replace('"', "'")
    }

    /// Whole numbers without a trailing `.0`
    fn format_number(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            format!("{value:.2}")
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
    }
}
