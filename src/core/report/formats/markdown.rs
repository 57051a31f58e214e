//! Markdown chart renderer
//!
//! Renders a Mermaid line chart followed by a table of the same points. These
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ChartRenderer, ChartSpec};
use askama::Template;
use std::error::Error;

/// One table row, already formatted
struct Row {
    x: String,
    y: String,
}

/// Askama view for the Markdown chart
#[derive(Template)]
#[template(path = "projection.md")]
struct ProjectionMarkdown<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    chart: String,
    rows: Vec<Row>,
}

/// Markdown chart renderer
pub struct MarkdownChartRenderer;

impl MarkdownChartRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for MarkdownChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, Box<dyn Error>> {
        let view = ProjectionMarkdown {
            title: &spec.title,
            x_label: &spec.x_label,
            y_label: &spec.y_label,
            chart: MermaidGenerator::generate_xy_chart(spec),
            rows: spec
                .points
                .iter()
                .map(|(x, y)| Row {
                    x: format!("{x}"),
                    y: format!("{y}"),
                })
                .collect(),
        };
        Ok(view.render()?)
    }
}
