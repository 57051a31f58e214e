//! Target resolution with a caller-supplied confirmation step
//!
//! The arithmetic never blocks on input. When a target is out of reach,
//! [`resolve_target`] hands the error to a `confirm` callback, and the CLI decides
//! how to ask (stdin, a flag, a test stub).

use crate::core::error::{GradeError, GradeResult};
use crate::core::forecast::{required_average_for_target, ProjectionPoint, ProjectionRange};
use crate::core::models::Degree;

/// What came of asking for a target grade
#[derive(Debug, Clone, PartialEq)]
pub enum TargetOutcome {
    /// The target is reachable with this average (rounded up)
    Reachable {
        /// Required average over all remaining work
        required_average: i64,
    },
    /// The target is out of reach and the caller asked for the projection instead
    Projection {
        /// Average the target would have needed
        required: f64,
        /// Projection series over the requested range
        points: Vec<ProjectionPoint>,
    },
    /// The target is out of reach and the caller declined the projection
    Declined {
        /// Average the target would have needed
        required: f64,
    },
}

/// Interpret a y/n answer. Only the trailing line ending is stripped.
///
/// # Errors
/// Returns [`GradeError::InvalidYesOrNoInput`] for anything but `y` or `n`.
pub fn parse_yes_no(input: &str) -> GradeResult<bool> {
    match input.trim_end_matches(['\r', '\n']) {
        "y" => Ok(true),
        "n" => Ok(false),
        other => Err(GradeError::InvalidYesOrNoInput {
            input: other.to_string(),
        }),
    }
}

/// Work out the average needed for `target`, falling back to the projection series
/// over `range` when the target can't be reached and `confirm` agrees.
///
/// # Errors
/// Any error from the inversion other than an unreachable target, any error from
/// `confirm`, and any error building the projection series.
pub fn resolve_target<F>(
    degree: &Degree,
    target: f64,
    range: &ProjectionRange,
    confirm: F,
) -> GradeResult<TargetOutcome>
where
    F: FnOnce(&GradeError) -> GradeResult<bool>,
{
    match required_average_for_target(degree, target) {
        Ok(required_average) => Ok(TargetOutcome::Reachable { required_average }),
        Err(err @ GradeError::TargetGradeNotPossible { required }) => {
            if confirm(&err)? {
                Ok(TargetOutcome::Projection {
                    required,
                    points: range.project(degree)?,
                })
            } else {
                Ok(TargetOutcome::Declined { required })
            }
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AssessmentKind, Module, ModuleAssessment, UniversityYear};

    fn degree() -> Degree {
        let module = |credits, score| {
            Module::new(
                "Module".to_string(),
                credits,
                vec![ModuleAssessment::new(AssessmentKind::Exam, 100, score)],
            )
        };
        Degree::new(vec![
            UniversityYear::new(2, 20, vec![module(120, 75.25)]),
            UniversityYear::new(3, 40, vec![module(45, 75.5)]),
        ])
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("n\n"), Ok(false));
        assert_eq!(parse_yes_no("y\r\n"), Ok(true));
    }

    #[test]
    fn test_parse_yes_no_is_exact() {
        for input in ["Y", "yes", " y", "", "no"] {
            assert!(matches!(
                parse_yes_no(input),
                Err(GradeError::InvalidYesOrNoInput { .. })
            ));
        }
    }

    #[test]
    fn test_reachable_never_asks() {
        let outcome = resolve_target(&degree(), 70.0, &ProjectionRange::default(), |_| {
            panic!("confirm should not be called")
        });
        assert_eq!(
            outcome,
            Ok(TargetOutcome::Reachable {
                required_average: 68
            })
        );
    }

    #[test]
    fn test_unreachable_accepts_projection() {
        let outcome =
            resolve_target(&degree(), 95.0, &ProjectionRange::default(), |_| Ok(true)).unwrap();
        match outcome {
            TargetOutcome::Projection { required, points } => {
                assert!(required > 100.0);
                assert_eq!(points.len(), 13);
            }
            other => panic!("expected projection, got {other:?}"),
        }
    }

    #[test]
    fn test_unreachable_declined() {
        let outcome = resolve_target(&degree(), 95.0, &ProjectionRange::default(), |_| {
            parse_yes_no("n")
        })
        .unwrap();
        assert!(matches!(outcome, TargetOutcome::Declined { .. }));
    }

    #[test]
    fn test_invalid_answer_propagates() {
        let outcome = resolve_target(&degree(), 95.0, &ProjectionRange::default(), |_| {
            parse_yes_no("maybe")
        });
        assert_eq!(
            outcome,
            Err(GradeError::InvalidYesOrNoInput {
                input: "maybe".to_string()
            })
        );
    }
}
