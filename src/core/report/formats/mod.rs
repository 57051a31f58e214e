//! Chart format implementations
//!
//! Provides renderers for the supported chart formats: Markdown and HTML.

pub mod html;
pub mod markdown;

pub use html::HtmlChartRenderer;
pub use markdown::MarkdownChartRenderer;

use super::ChartRenderer;
use std::fmt;
use std::str::FromStr;

/// Supported chart formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Markdown with a Mermaid xychart and a points table
    Markdown,
    /// Self-contained HTML page with an inline SVG line chart
    Html,
}

impl ChartFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// Renderer for this format
    #[must_use]
    pub fn renderer(&self) -> Box<dyn ChartRenderer> {
        match self {
            Self::Markdown => Box::new(MarkdownChartRenderer::new()),
            Self::Html => Box::new(HtmlChartRenderer::new()),
        }
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(format!("Unknown chart format: {s}")),
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("md".parse::<ChartFormat>(), Ok(ChartFormat::Markdown));
        assert_eq!("Markdown".parse::<ChartFormat>(), Ok(ChartFormat::Markdown));
        assert_eq!("HTML".parse::<ChartFormat>(), Ok(ChartFormat::Html));
        assert!("pdf".parse::<ChartFormat>().is_err());
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(ChartFormat::Html.extension(), "html");
        assert_eq!(ChartFormat::Markdown.extension(), "md");
        assert_eq!(ChartFormat::Markdown.to_string(), "markdown");
    }
}
