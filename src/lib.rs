//! Shared library for `GradeForecast`
//! Contains the grade arithmetic, configuration, and chart rendering used by the CLI

pub mod core;
pub mod logger;

pub use core::{config, error, forecast, get_version, loader, models, prompt, report};
