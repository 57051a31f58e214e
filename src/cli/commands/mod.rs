//! CLI command handlers for `GradeForecast`.
//!
//! Each command is implemented in its own submodule; helpers shared between them
//! live here.

pub mod config;
pub mod project;
pub mod score;
pub mod target;

use grade_forecast::error::GradeResult;
use grade_forecast::loader::parse_degree_file;
use grade_forecast::models::Degree;
use grade_forecast::prompt::parse_yes_no;
use grade_forecast::{error, info};
use std::io::{self, Write};
use std::path::Path;

/// Ask a y/n question on stdout and read the answer from stdin
pub fn ask_yes_no(question: &str) -> GradeResult<bool> {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    parse_yes_no(&response)
}

/// Load a degree file, logging and formatting failures for the user
pub fn load_degree(input_file: &Path) -> Result<Degree, String> {
    let degree = parse_degree_file(input_file).map_err(|e| {
        error!("Failed to load degree {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;
    info!("Degree loaded: {}", input_file.display());
    Ok(degree)
}
