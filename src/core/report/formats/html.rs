//! HTML chart renderer
//!
//! Renders a self-contained page with an inline SVG line chart. Styling comes
//! from the chart's [`ChartTheme`](crate::core::report::ChartTheme); no scripts or
//! external assets are needed.

use crate::core::report::visualization::SvgChart;
use crate::core::report::{ChartRenderer, ChartSpec, ChartTheme};
use askama::Template;
use std::error::Error;

/// Askama view over a laid-out chart
#[derive(Template)]
#[template(path = "projection.html")]
struct ProjectionPage<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    theme: &'a ChartTheme,
    svg: SvgChart,
}

/// HTML chart renderer
pub struct HtmlChartRenderer;

impl HtmlChartRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for HtmlChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, Box<dyn Error>> {
        let page = ProjectionPage {
            title: &spec.title,
            x_label: &spec.x_label,
            y_label: &spec.y_label,
            theme: &spec.theme,
            svg: SvgChart::layout(spec),
        };
        Ok(page.render()?)
    }
}
