//! Module model

use crate::core::error::{GradeError, GradeResult};
use crate::core::models::ModuleAssessment;
use serde::{Deserialize, Serialize};

/// A named unit of study worth some credits, graded by one or more assessments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Module name (e.g., "Complex Analysis")
    pub name: String,

    /// Credit value (10, 15, 20, ...)
    pub credits: u32,

    /// Graded components, in the order they were listed
    pub assessments: Vec<ModuleAssessment>,
}

impl Module {
    /// Create a new module
    #[must_use]
    pub const fn new(name: String, credits: u32, assessments: Vec<ModuleAssessment>) -> Self {
        Self {
            name,
            credits,
            assessments,
        }
    }

    /// Weighted average of the assessment scores, as a percentage.
    ///
    /// Weights are normalized by their own total, so weights that don't add up to
    /// 100 still give a proper average and a lone assessment scores as itself.
    ///
    /// # Errors
    /// Returns [`GradeError::EmptyInput`] when the module has no assessments or all
    /// weights are zero.
    pub fn score_percentage(&self) -> GradeResult<f64> {
        let total_weight: f64 = self
            .assessments
            .iter()
            .map(ModuleAssessment::weight_fraction)
            .sum();

        if self.assessments.is_empty() || total_weight <= 0.0 {
            return Err(GradeError::empty(format!(
                "module '{}' has no weighted assessments",
                self.name
            )));
        }

        let weighted: f64 = self
            .assessments
            .iter()
            .map(|a| a.score_percentage * a.weight_fraction())
            .sum();

        Ok(weighted / total_weight)
    }

    /// Credits earned in proportion to the module score (`score% x credits / 100`)
    ///
    /// # Errors
    /// Propagates [`Module::score_percentage`] errors.
    pub fn achieved_credits(&self) -> GradeResult<f64> {
        Ok(self.score_percentage()? * f64::from(self.credits) / 100.0)
    }
}
