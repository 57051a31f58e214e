//! Visualization generation for projection charts
//!
//! Provides a Mermaid xychart generator (for Markdown) and SVG geometry (for HTML).

pub mod mermaid;
pub mod svg;

pub use mermaid::MermaidGenerator;
pub use svg::SvgChart;
