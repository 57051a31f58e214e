//! Degree file loader
//!
//! Degrees are described in TOML:
//!
//! ```toml
//! name = "BSc Physics"
//!
//! [[years]]
//! number = 2
//! weight = 20
//!
//! [[years.modules]]
//! name = "Complex Analysis"
//! credits = 10
//! assessments = [{ kind = "exam", weight = 100, score = 88 }]
//! ```

use crate::core::models::Degree;
use crate::{debug, info, warn};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to read or parse a degree file
#[derive(Debug, Error)]
pub enum DegreeFileError {
    /// The file couldn't be read
    #[error("failed to read degree file: {0}")]
    Io(#[from] std::io::Error),

    /// The file isn't a valid degree description
    #[error("invalid degree file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a degree from TOML text
///
/// # Errors
/// Returns [`DegreeFileError::Parse`] if the text doesn't describe a degree.
pub fn parse_degree_str(text: &str) -> Result<Degree, DegreeFileError> {
    let degree: Degree = toml::from_str(text)?;

    for year in &degree.years {
        debug!(
            "Year {}: weight {}%, {} modules, {} credits",
            year.year_number,
            year.year_weight_percentage,
            year.modules.len(),
            year.total_credits()
        );
        for module in year.modules.iter().filter(|m| m.assessments.is_empty()) {
            warn!(
                "Module '{}' in year {} has no assessments",
                module.name, year.year_number
            );
        }
    }

    Ok(degree)
}

/// Load a degree from a TOML file
///
/// # Errors
/// Returns [`DegreeFileError::Io`] if the file can't be read, or
/// [`DegreeFileError::Parse`] if its contents are invalid.
pub fn parse_degree_file<P: AsRef<Path>>(path: P) -> Result<Degree, DegreeFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let degree = parse_degree_str(&text)?;
    info!(
        "Loaded degree '{}' from {} ({} years)",
        degree.display_name(),
        path.display(),
        degree.years.len()
    );
    Ok(degree)
}
