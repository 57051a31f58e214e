//! Project command handler
//!
//! Writes a chart of final degree score against the average achieved on all
//! remaining work.

use super::load_degree;
use grade_forecast::config::Config;
use grade_forecast::forecast::{ProjectionPoint, ProjectionRange};
use grade_forecast::models::Degree;
use grade_forecast::report::{ChartFormat, ChartSpec};
use grade_forecast::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Range overrides from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeArgs {
    /// First average
    pub start: Option<f64>,
    /// Last average
    pub stop: Option<f64>,
    /// Increment
    pub step: Option<f64>,
}

impl RangeArgs {
    /// Fill unset values from the configured range
    pub fn resolve(self, defaults: &ProjectionRange) -> ProjectionRange {
        ProjectionRange::new(
            self.start.unwrap_or(defaults.start),
            self.stop.unwrap_or(defaults.stop),
            self.step.unwrap_or(defaults.step),
        )
    }
}

/// Run the project command.
pub fn run(
    input_file: &Path,
    range: RangeArgs,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = project(input_file, range, format_str, output_file, config) {
        error!("Projection failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn project(
    input_file: &Path,
    range: RangeArgs,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = parse_format(format_str)?;
    let degree = load_degree(input_file)?;
    let range = range.resolve(&config.projection);

    let points = range
        .project(&degree)
        .map_err(|e| format!("✗ Failed to project {}: {e}", input_file.display()))?;

    print_points(&points);
    let path = write_chart(&degree, &points, format, input_file, output_file, config)?;
    println!("✓ Chart generated: {}", path.display());
    Ok(())
}

/// Parse a chart format argument into a user-facing error
pub fn parse_format(format_str: &str) -> Result<ChartFormat, String> {
    ChartFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))
}

/// Print the projection as a two-column table
pub fn print_points(points: &[ProjectionPoint]) {
    println!("\n{:>10}  {:>12}", "Average", "Final Score");
    for point in points {
        println!("{:>9}%  {:>11}%", point.average, point.final_score);
    }
}

/// Output path: the explicit one, or `<reports_dir>/<input stem>_projection.<ext>`
///
/// # Errors
/// Returns an error if the reports directory can't be created.
pub fn resolve_output_path(
    input_file: &Path,
    output_file: Option<&Path>,
    format: ChartFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("degree");
    Ok(reports_dir.join(format!("{stem}_projection.{}", format.extension())))
}

/// Render the projection chart for `degree` and write it out
///
/// # Errors
/// Returns an error if the degree can't be scored, the path can't be prepared,
/// or rendering fails.
pub fn write_chart(
    degree: &Degree,
    points: &[ProjectionPoint],
    format: ChartFormat,
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let current = degree
        .score()
        .map_err(|e| format!("✗ Failed to score {}: {e}", input_file.display()))?;
    let spec = ChartSpec::projection(
        degree.display_name(),
        &current,
        points,
        config.chart.clone(),
    );

    let path = resolve_output_path(input_file, output_file, format, config)?;
    format
        .renderer()
        .generate(&spec, &path)
        .map_err(|e| format!("✗ Failed to generate {format} chart: {e}"))?;
    info!("Chart exported to: {}", path.display());
    Ok(path)
}
