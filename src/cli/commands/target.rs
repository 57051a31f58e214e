//! Target command handler
//!
//! Prints the average needed on remaining work to reach a target grade. When the
//! target is out of reach the user is asked whether to chart the projection instead.

use super::project::{parse_format, print_points, write_chart};
use super::{ask_yes_no, load_degree};
use grade_forecast::config::Config;
use grade_forecast::prompt::{resolve_target, TargetOutcome};
use grade_forecast::{error, warn};
use std::path::Path;

/// Run the target command.
pub fn run(
    input_file: &Path,
    target: f64,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = solve(input_file, target, format_str, output_file, config) {
        error!("Target calculation failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn solve(
    input_file: &Path,
    target: f64,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = parse_format(format_str)?;
    let degree = load_degree(input_file)?;

    let outcome = resolve_target(&degree, target, &config.projection, |reason| {
        warn!("{reason}");
        println!("✗ A final score of {target}% is out of reach.");
        ask_yes_no("Would you like to see the score projection instead?")
    })
    .map_err(|e| format!("✗ {e}"))?;

    match outcome {
        TargetOutcome::Reachable { required_average } if required_average <= 0 => {
            println!("✓ A final score of {target}% is already secured.");
        }
        TargetOutcome::Reachable { required_average } => {
            println!(
                "Required average on remaining work for {target}%: {required_average}%"
            );
        }
        TargetOutcome::Projection { points, .. } => {
            print_points(&points);
            let path = write_chart(&degree, &points, format, input_file, output_file, config)?;
            println!("✓ Chart generated: {}", path.display());
        }
        TargetOutcome::Declined { required } => {
            println!("It would need an average of {required:.1}% on remaining work.");
        }
    }

    Ok(())
}
