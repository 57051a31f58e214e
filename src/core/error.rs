//! Domain errors for grade calculations
//!
//! Every failure here is a precondition violation on the input data. None of them
//! are transient, so callers match on the variant and report it.

use thiserror::Error;

/// Errors raised by the grade arithmetic, target inversion, and confirmation prompt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// More than one year has fewer than the full load of credits
    #[error("more than one year is in progress (years {years:?}); only one year may be incomplete")]
    MoreThanOneYearInProgress {
        /// Year numbers of every incomplete year
        years: Vec<u32>,
    },

    /// No unassigned weight remains, so no future result can move the final score
    #[error("the degree is complete: no remaining work can change the final score")]
    CompletedDegree,

    /// The target needs an average above 100%
    #[error("target grade not possible: it requires an average of {required:.1}%, above 100%")]
    TargetGradeNotPossible {
        /// The average (or plot bound) that was asked for
        required: f64,
    },

    /// The confirmation prompt got something other than `y` or `n`
    #[error("invalid input '{input}': expected 'y' or 'n'")]
    InvalidYesOrNoInput {
        /// The rejected input, without its line ending
        input: String,
    },

    /// An average was requested over nothing (no assessments, no credits, no weight)
    #[error("cannot average empty input: {context}")]
    EmptyInput {
        /// What was empty
        context: String,
    },

    /// A projection range that can't be stepped through
    #[error("invalid projection range: {reason}")]
    InvalidRange {
        /// Why the range was rejected
        reason: String,
    },
}

impl GradeError {
    /// Shorthand for [`GradeError::EmptyInput`]
    pub fn empty(context: impl Into<String>) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }
}

/// Result alias for grade calculations
pub type GradeResult<T> = Result<T, GradeError>;
