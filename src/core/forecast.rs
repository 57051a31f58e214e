//! Target inversion and score projection
//!
//! The final degree score is modelled as a straight line in the average `A` the
//! student achieves on everything still to come (the rest of the year in progress
//! plus every year not yet started):
//!
//! ```text
//! final(A) = (1 - W_R) * S_P - W_1 * S_1 * r / 120 + A * (W_1 * r / 120 + W_R)
//! ```
//!
//! `S_P` is the current exact degree score, `W_R` the weight of unstarted years, and
//! `W_1`, `S_1`, `r` the weight, projected score, and remaining credits of the year in
//! progress (zero when there is none). Solving `final(A) = T` for `A` gives the
//! required average; evaluating `final(A)` gives the projection curve.

use crate::core::error::{GradeError, GradeResult};
use crate::core::models::{Degree, FULL_YEAR_CREDITS};
use serde::{Deserialize, Serialize};

/// Slack applied before rounding so float noise can't cross an integer boundary
pub const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Highest achievable average
pub const MAX_AVERAGE: f64 = 100.0;

/// Most points a projection range may produce
pub const MAX_PROJECTION_POINTS: usize = 10_000;

/// One point of the projection curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Assumed average over all remaining work
    pub average: f64,
    /// Resulting final degree score (floored)
    pub final_score: i64,
}

/// Inclusive range of averages to project over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionRange {
    /// First average
    pub start: f64,
    /// Last average (inclusive, at most 100)
    pub stop: f64,
    /// Increment between averages
    pub step: f64,
}

impl Default for ProjectionRange {
    fn default() -> Self {
        Self {
            start: 40.0,
            stop: 100.0,
            step: 5.0,
        }
    }
}

impl ProjectionRange {
    /// Create a new range
    #[must_use]
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Every average from `start` to `stop` inclusive.
    ///
    /// # Errors
    /// Returns [`GradeError::TargetGradeNotPossible`] when `stop` is above 100 and
    /// [`GradeError::InvalidRange`] for a non-finite bound, a non-positive step,
    /// `start > stop`, or more than [`MAX_PROJECTION_POINTS`] points.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn averages(&self) -> GradeResult<Vec<f64>> {
        if !self.stop.is_finite() {
            return Err(GradeError::InvalidRange {
                reason: format!("stop must be a number, got {}", self.stop),
            });
        }
        if self.stop > MAX_AVERAGE {
            return Err(GradeError::TargetGradeNotPossible {
                required: self.stop,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(GradeError::InvalidRange {
                reason: format!("step must be positive, got {}", self.step),
            });
        }
        if !self.start.is_finite() || self.start > self.stop {
            return Err(GradeError::InvalidRange {
                reason: format!("start {} is after stop {}", self.start, self.stop),
            });
        }

        let intervals = ((self.stop - self.start) / self.step + ROUNDING_TOLERANCE).floor();
        if intervals >= MAX_PROJECTION_POINTS as f64 {
            return Err(GradeError::InvalidRange {
                reason: format!(
                    "step {} gives more than {MAX_PROJECTION_POINTS} points",
                    self.step
                ),
            });
        }

        let count = intervals as usize + 1;
        Ok((0..count)
            .map(|i| (i as f64).mul_add(self.step, self.start))
            .collect())
    }

    /// Projection series for this range
    ///
    /// # Errors
    /// See [`score_projection_series`].
    pub fn project(&self, degree: &Degree) -> GradeResult<Vec<ProjectionPoint>> {
        score_projection_series(degree, self.start, self.stop, self.step)
    }
}

/// Coefficients of `final(A) = fixed + slope * A`
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoreBlend {
    fixed: f64,
    slope: f64,
}

impl ScoreBlend {
    fn final_score(self, average: f64) -> f64 {
        self.slope.mul_add(average, self.fixed)
    }
}

fn score_blend(degree: &Degree) -> GradeResult<ScoreBlend> {
    let in_progress = degree.year_in_progress_stats()?;
    let unstarted_weight = degree.remaining_weight();
    let assigned_weight = 1.0 - unstarted_weight;

    // With nothing weighted yet the current score contributes nothing
    let completed = if assigned_weight > 0.0 {
        assigned_weight * degree.exact_score()?
    } else {
        0.0
    };

    let open_share =
        in_progress.weight * f64::from(in_progress.remaining_credits) / f64::from(FULL_YEAR_CREDITS);

    Ok(ScoreBlend {
        fixed: open_share.mul_add(-in_progress.score, completed),
        slope: open_share + unstarted_weight,
    })
}

/// Average needed over all remaining work to finish on `target`, rounded up.
///
/// A result of zero or less means the target is already secured.
///
/// # Errors
/// - [`GradeError::MoreThanOneYearInProgress`] if several years are incomplete
/// - [`GradeError::CompletedDegree`] if no remaining work carries any weight
/// - [`GradeError::TargetGradeNotPossible`] if the average would exceed 100
/// - [`GradeError::EmptyInput`] if a year or module can't be scored
/// - [`GradeError::InvalidRange`] if `target` isn't a finite number
#[allow(clippy::cast_possible_truncation)]
pub fn required_average_for_target(degree: &Degree, target: f64) -> GradeResult<i64> {
    if !target.is_finite() {
        return Err(GradeError::InvalidRange {
            reason: format!("target must be a number, got {target}"),
        });
    }

    let blend = score_blend(degree)?;
    if blend.slope <= ROUNDING_TOLERANCE {
        return Err(GradeError::CompletedDegree);
    }

    let required = (target - blend.fixed) / blend.slope;
    if required > MAX_AVERAGE + ROUNDING_TOLERANCE {
        return Err(GradeError::TargetGradeNotPossible { required });
    }

    Ok((required - ROUNDING_TOLERANCE).ceil() as i64)
}

/// Final degree score if every remaining piece of work averages `average`, rounded down.
///
/// For a completed degree the line is flat and this returns the current score floored.
///
/// # Errors
/// - [`GradeError::MoreThanOneYearInProgress`] if several years are incomplete
/// - [`GradeError::EmptyInput`] if a year or module can't be scored
#[allow(clippy::cast_possible_truncation)]
pub fn project_final_score(degree: &Degree, average: f64) -> GradeResult<i64> {
    let blend = score_blend(degree)?;
    Ok((blend.final_score(average) + ROUNDING_TOLERANCE).floor() as i64)
}

/// `(average, final score)` pairs for averages from `start` to `stop` inclusive.
///
/// # Errors
/// - [`GradeError::TargetGradeNotPossible`] if `stop` is above 100
/// - [`GradeError::InvalidRange`] for a non-finite bound, a non-positive step,
///   `start > stop`, or too many points
/// - anything [`project_final_score`] can return
#[allow(clippy::cast_possible_truncation)]
pub fn score_projection_series(
    degree: &Degree,
    start: f64,
    stop: f64,
    step: f64,
) -> GradeResult<Vec<ProjectionPoint>> {
    let averages = ProjectionRange::new(start, stop, step).averages()?;
    let blend = score_blend(degree)?;

    Ok(averages
        .into_iter()
        .map(|average| ProjectionPoint {
            average,
            final_score: (blend.final_score(average) + ROUNDING_TOLERANCE).floor() as i64,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AssessmentKind, Module, ModuleAssessment, UniversityYear};

    fn year(number: u32, weight: u32, modules: &[(u32, f64)]) -> UniversityYear {
        UniversityYear::new(
            number,
            weight,
            modules
                .iter()
                .map(|&(credits, score)| {
                    Module::new(
                        "Module".to_string(),
                        credits,
                        vec![ModuleAssessment::new(AssessmentKind::Coursework, 100, score)],
                    )
                })
                .collect(),
        )
    }

    /// Year 2 complete at 75.25, year 3 at 75.5 over 45 credits, 40% unstarted
    fn physics() -> Degree {
        Degree::new(vec![
            year(2, 20, &[(120, 75.25)]),
            year(3, 40, &[(10, 67.0), (10, 98.0), (10, 69.0), (15, 70.5)]),
        ])
    }

    /// Year 2 complete at 62, final year at 76.33 over 30 credits, nothing unstarted
    fn final_year_in_progress() -> Degree {
        Degree::new(vec![
            year(2, 40, &[(120, 62.0)]),
            year(3, 60, &[(10, 79.0), (20, 75.0)]),
        ])
    }

    #[test]
    fn test_required_average_with_unstarted_years() {
        // (70 - 45.25 + 18.875) / 0.65 = 67.1
        assert_eq!(required_average_for_target(&physics(), 70.0), Ok(68));
        // (90 - 45.25 + 18.875) / 0.65 = 97.9
        assert_eq!(required_average_for_target(&physics(), 90.0), Ok(98));
    }

    #[test]
    fn test_required_average_for_final_year() {
        // (70 - 70.6 + 34.35) / 0.45 = 75 exactly
        assert_eq!(
            required_average_for_target(&final_year_in_progress(), 70.0),
            Ok(75)
        );
    }

    #[test]
    fn test_unreachable_target() {
        let result = required_average_for_target(&physics(), 95.0);
        match result {
            Err(GradeError::TargetGradeNotPossible { required }) => {
                assert!(required > 100.0 && required < 106.0);
            }
            other => panic!("expected TargetGradeNotPossible, got {other:?}"),
        }
    }

    #[test]
    fn test_completed_degree() {
        let degree = Degree::new(vec![
            year(2, 40, &[(120, 62.0)]),
            year(3, 60, &[(120, 76.0)]),
        ]);
        assert_eq!(
            required_average_for_target(&degree, 60.0),
            Err(GradeError::CompletedDegree)
        );
    }

    #[test]
    fn test_two_years_in_progress() {
        let degree = Degree::new(vec![year(2, 40, &[(60, 62.0)]), year(3, 60, &[(30, 76.0)])]);
        assert!(matches!(
            required_average_for_target(&degree, 60.0),
            Err(GradeError::MoreThanOneYearInProgress { .. })
        ));
    }

    #[test]
    fn test_no_years_needs_target_itself() {
        let degree = Degree::new(Vec::new());
        assert_eq!(required_average_for_target(&degree, 70.0), Ok(70));
        assert_eq!(project_final_score(&degree, 64.0), Ok(64));
    }

    #[test]
    fn test_secured_target_is_non_positive() {
        let degree = Degree::new(vec![year(1, 90, &[(120, 90.0)])]);
        // 81 already banked against a target of 40
        assert!(required_average_for_target(&degree, 40.0).unwrap() <= 0);
    }

    #[test]
    fn test_round_trip_within_one() {
        for degree in [physics(), final_year_in_progress()] {
            for target in [55.0, 60.0, 65.0, 70.0, 75.0] {
                let Ok(required) = required_average_for_target(&degree, target) else {
                    continue;
                };
                #[allow(clippy::cast_precision_loss)]
                let projected = project_final_score(&degree, required as f64).unwrap();
                #[allow(clippy::cast_possible_truncation)]
                let target = target as i64;
                assert!(
                    (projected - target).abs() <= 1,
                    "target {target} -> average {required} -> {projected}"
                );
            }
        }
    }

    #[test]
    fn test_project_final_score() {
        // 26.375 + 68 * 0.65 = 70.575
        assert_eq!(project_final_score(&physics(), 68.0), Ok(70));
        assert_eq!(project_final_score(&final_year_in_progress(), 75.0), Ok(70));
    }

    #[test]
    fn test_projection_is_flat_for_completed_degree() {
        let degree = Degree::new(vec![year(1, 100, &[(120, 72.4)])]);
        assert_eq!(project_final_score(&degree, 40.0), Ok(72));
        assert_eq!(project_final_score(&degree, 100.0), Ok(72));
    }

    #[test]
    fn test_series_has_thirteen_points() {
        let series = score_projection_series(&physics(), 40.0, 100.0, 5.0).unwrap();
        assert_eq!(series.len(), 13);
        assert!((series[0].average - 40.0).abs() < 1e-9);
        assert!((series[12].average - 100.0).abs() < 1e-9);
        assert!(series
            .windows(2)
            .all(|pair| pair[0].final_score <= pair[1].final_score));
    }

    #[test]
    fn test_series_rejects_stop_above_hundred() {
        assert_eq!(
            score_projection_series(&physics(), 40.0, 105.0, 5.0),
            Err(GradeError::TargetGradeNotPossible { required: 105.0 })
        );
    }

    #[test]
    fn test_series_rejects_bad_step() {
        assert!(matches!(
            score_projection_series(&physics(), 40.0, 100.0, 0.0),
            Err(GradeError::InvalidRange { .. })
        ));
        assert!(matches!(
            score_projection_series(&physics(), 90.0, 80.0, 5.0),
            Err(GradeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_series_rejects_tiny_step() {
        assert!(matches!(
            score_projection_series(&physics(), 0.0, 100.0, 1e-300),
            Err(GradeError::InvalidRange { .. })
        ));
        assert!(matches!(
            ProjectionRange::new(0.0, 100.0, 1e-9).averages(),
            Err(GradeError::InvalidRange { .. })
        ));
        assert_eq!(
            // 9999 steps of 2^-7, exact in binary
            ProjectionRange::new(0.0, 78.117_187_5, 0.007_812_5)
                .averages()
                .map(|a| a.len()),
            Ok(MAX_PROJECTION_POINTS)
        );
    }

    #[test]
    fn test_series_rejects_non_finite_bounds() {
        for (start, stop) in [(40.0, f64::NAN), (f64::NAN, 100.0), (40.0, f64::NEG_INFINITY)] {
            assert!(
                matches!(
                    ProjectionRange::new(start, stop, 5.0).averages(),
                    Err(GradeError::InvalidRange { .. })
                ),
                "start {start}, stop {stop}"
            );
        }
    }

    #[test]
    fn test_target_must_be_finite() {
        for target in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                required_average_for_target(&physics(), target),
                Err(GradeError::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn test_range_with_uneven_end() {
        let averages = ProjectionRange::new(40.0, 52.0, 5.0).averages().unwrap();
        assert_eq!(averages.len(), 3);
        assert!((averages[2] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_range_matches_series() {
        let range = ProjectionRange::default();
        assert_eq!(
            range.project(&physics()).unwrap(),
            score_projection_series(&physics(), 40.0, 100.0, 5.0).unwrap()
        );
    }
}
