//! Assessment model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of graded component. Descriptive only; it never changes the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    /// Coursework, labs, projects
    Coursework,
    /// Written or oral examination
    Exam,
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coursework => write!(f, "coursework"),
            Self::Exam => write!(f, "exam"),
        }
    }
}

/// One graded component of a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleAssessment {
    /// Coursework or exam
    pub kind: AssessmentKind,

    /// Share of the module mark, 0-100
    #[serde(rename = "weight")]
    pub weight_percentage: u32,

    /// Mark achieved, 0-100
    #[serde(rename = "score")]
    pub score_percentage: f64,
}

impl ModuleAssessment {
    /// Create a new assessment
    #[must_use]
    pub const fn new(kind: AssessmentKind, weight_percentage: u32, score_percentage: f64) -> Self {
        Self {
            kind,
            weight_percentage,
            score_percentage,
        }
    }

    /// Weight as a fraction of the module
    #[must_use]
    pub fn weight_fraction(&self) -> f64 {
        f64::from(self.weight_percentage) / 100.0
    }
}
