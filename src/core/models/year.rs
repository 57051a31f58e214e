//! University year model

use crate::core::error::{GradeError, GradeResult};
use crate::core::models::Module;
use serde::{Deserialize, Serialize};

/// Credits in a full year. A year with fewer is still in progress.
pub const FULL_YEAR_CREDITS: u32 = 120;

/// A year's score together with whether it's final or a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearScore {
    /// Credit-weighted average over the modules graded so far
    pub percentage: f64,
    /// `true` when fewer than [`FULL_YEAR_CREDITS`] have been graded
    pub is_projected: bool,
}

/// One year of study: its modules and how much it counts towards the degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniversityYear {
    /// Year of study (1, 2, 3, ...)
    #[serde(rename = "number")]
    pub year_number: u32,

    /// Share of the degree, 0-100
    #[serde(rename = "weight")]
    pub year_weight_percentage: u32,

    /// Modules graded so far
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl UniversityYear {
    /// Create a new year
    #[must_use]
    pub const fn new(year_number: u32, year_weight_percentage: u32, modules: Vec<Module>) -> Self {
        Self {
            year_number,
            year_weight_percentage,
            modules,
        }
    }

    /// Sum of module credits
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.modules.iter().map(|m| m.credits).sum()
    }

    /// Sum over modules of `score% x credits / 100`
    ///
    /// # Errors
    /// Returns [`GradeError::EmptyInput`] if any module can't be scored.
    pub fn achieved_credits(&self) -> GradeResult<f64> {
        self.modules.iter().map(Module::achieved_credits).sum()
    }

    /// Credit-weighted average of module scores (`100 x achieved / total`).
    ///
    /// A partial year is scored over the credits it has, so a 10-credit module in a
    /// 45-credit year counts for 10/45 rather than 10/120.
    ///
    /// # Errors
    /// Returns [`GradeError::EmptyInput`] when the year has no credits or a module
    /// has no assessments.
    pub fn score_percentage(&self) -> GradeResult<f64> {
        let total = self.total_credits();
        if total == 0 {
            return Err(GradeError::empty(format!(
                "year {} has no credits",
                self.year_number
            )));
        }
        Ok(100.0 * self.achieved_credits()? / f64::from(total))
    }

    /// Score plus the projected flag
    ///
    /// # Errors
    /// Same as [`UniversityYear::score_percentage`].
    pub fn score(&self) -> GradeResult<YearScore> {
        Ok(YearScore {
            percentage: self.score_percentage()?,
            is_projected: self.is_in_progress(),
        })
    }

    /// `true` when fewer than [`FULL_YEAR_CREDITS`] credits are present
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.total_credits() < FULL_YEAR_CREDITS
    }

    /// Credits still to be graded this year (zero for a complete year)
    #[must_use]
    pub fn remaining_credits(&self) -> u32 {
        FULL_YEAR_CREDITS.saturating_sub(self.total_credits())
    }

    /// Year weight as a fraction of the degree
    #[must_use]
    pub fn weight_fraction(&self) -> f64 {
        f64::from(self.year_weight_percentage) / 100.0
    }
}
