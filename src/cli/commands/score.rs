//! Score command handler
//!
//! Prints every module, year, and the overall degree score for a degree file.

use super::load_degree;
use grade_forecast::error::GradeResult;
use grade_forecast::models::{Degree, FULL_YEAR_CREDITS};
use grade_forecast::{error, verbose};
use std::path::Path;

/// Run the score command.
pub fn run(input_file: &Path) {
    let result = load_degree(input_file).and_then(|degree| {
        print_breakdown(&degree).map_err(|e| {
            error!("Scoring failed for {}: {e}", input_file.display());
            format!("✗ Failed to score {}: {e}", input_file.display())
        })
    });

    if let Err(err) = result {
        eprintln!("{err}");
    }
}

fn print_breakdown(degree: &Degree) -> GradeResult<()> {
    println!("\n=== {} ===", degree.display_name());

    for year in &degree.years {
        let score = year.score()?;
        let status = if score.is_projected {
            format!(
                " (projected from {}/{FULL_YEAR_CREDITS} credits)",
                year.total_credits()
            )
        } else {
            String::new()
        };
        println!(
            "\nYear {} (weight {}%): {:.2}%{status}",
            year.year_number, year.year_weight_percentage, score.percentage
        );

        for module in &year.modules {
            println!(
                "  {:<50} {:>3} credits  {:>6.2}%",
                module.name,
                module.credits,
                module.score_percentage()?
            );
            for assessment in &module.assessments {
                verbose!(
                    "      {:<12} weight {:>3}%  score {:>6.2}%",
                    assessment.kind.to_string(),
                    assessment.weight_percentage,
                    assessment.score_percentage
                );
            }
        }
    }

    let total = degree.score()?;
    println!("\n=== Summary ===");
    println!("Degree Score: {}% ({:.2}%)", total.score, total.exact);
    if total.is_projected {
        println!("ℹ Includes a year in progress, so this is a projected score.");
    }
    let unstarted = degree.remaining_weight();
    if unstarted > 0.0 {
        println!("Weight of years not yet started: {:.0}%", unstarted * 100.0);
    }

    Ok(())
}
