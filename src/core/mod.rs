//! Core module: grade arithmetic, input loading, configuration, and chart rendering

pub mod config;
pub mod error;
pub mod forecast;
pub mod loader;
pub mod models;
pub mod prompt;
pub mod report;

/// Returns the current version of the `GradeForecast` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
