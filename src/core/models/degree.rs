//! Degree model
//!
//! A degree is an ordered list of years. Year weights need not add up to 100; the
//! shortfall belongs to years that haven't started yet.

use crate::core::error::{GradeError, GradeResult};
use crate::core::models::{UniversityYear, FULL_YEAR_CREDITS};
use serde::{Deserialize, Serialize};

/// Degree score, rounded for display, with the exact value kept for further maths
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeScore {
    /// Weighted average of year scores, rounded to the nearest whole percent
    pub score: i64,
    /// Unrounded weighted average
    pub exact: f64,
    /// `true` when any contributing year is still in progress
    pub is_projected: bool,
}

/// Figures for the year in progress, or all zeros when every year is complete
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct InProgressStats {
    /// Projected score of the year so far
    pub score: f64,
    /// Credits still to be graded (`120 - total`)
    pub remaining_credits: u32,
    /// Year weight as a fraction
    pub weight: f64,
}

/// A degree made of weighted university years
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Degree {
    /// Degree title (optional, e.g. "BSc Physics")
    #[serde(default)]
    pub name: Option<String>,

    /// Years in order of study
    #[serde(default)]
    pub years: Vec<UniversityYear>,
}

impl Degree {
    /// Create a new degree
    #[must_use]
    pub const fn new(years: Vec<UniversityYear>) -> Self {
        Self { name: None, years }
    }

    /// Set the degree title
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name, falling back to a generic label
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Degree")
    }

    /// Weighted average of year scores using the year weights, unrounded.
    ///
    /// # Errors
    /// Returns [`GradeError::EmptyInput`] when there are no years, the year weights
    /// sum to zero, or a weighted year can't be scored. Zero-weight years are skipped.
    pub fn exact_score(&self) -> GradeResult<f64> {
        let total_weight: u32 = self.years.iter().map(|y| y.year_weight_percentage).sum();
        if total_weight == 0 {
            return Err(GradeError::empty("degree has no weighted years"));
        }

        let mut weighted = 0.0;
        for year in self.years.iter().filter(|y| y.year_weight_percentage > 0) {
            weighted += f64::from(year.year_weight_percentage) * year.score_percentage()?;
        }
        Ok(weighted / f64::from(total_weight))
    }

    /// Degree score rounded to the nearest whole percent
    ///
    /// # Errors
    /// Same as [`Degree::exact_score`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn calculate_score(&self) -> GradeResult<i64> {
        Ok(self.exact_score()?.round() as i64)
    }

    /// Rounded and exact score plus the projected flag
    ///
    /// # Errors
    /// Same as [`Degree::exact_score`].
    pub fn score(&self) -> GradeResult<DegreeScore> {
        let exact = self.exact_score()?;
        Ok(DegreeScore {
            score: self.calculate_score()?,
            exact,
            is_projected: self.years.iter().any(UniversityYear::is_in_progress),
        })
    }

    /// Find the single year with fewer than the full load of credits.
    ///
    /// # Errors
    /// Returns [`GradeError::MoreThanOneYearInProgress`] if several years qualify.
    pub fn detect_year_in_progress(&self) -> GradeResult<Option<&UniversityYear>> {
        let in_progress: Vec<&UniversityYear> = self
            .years
            .iter()
            .filter(|y| y.total_credits() < FULL_YEAR_CREDITS)
            .collect();

        match in_progress.as_slice() {
            [] => Ok(None),
            [year] => Ok(Some(*year)),
            many => Err(GradeError::MoreThanOneYearInProgress {
                years: many.iter().map(|y| y.year_number).collect(),
            }),
        }
    }

    /// Score, remaining credits, and weight of the year in progress.
    ///
    /// # Errors
    /// Returns [`GradeError::MoreThanOneYearInProgress`] from detection, or
    /// [`GradeError::EmptyInput`] if the year in progress can't be scored.
    pub fn year_in_progress_stats(&self) -> GradeResult<InProgressStats> {
        let Some(year) = self.detect_year_in_progress()? else {
            return Ok(InProgressStats::default());
        };

        Ok(InProgressStats {
            score: year.score_percentage()?,
            remaining_credits: year.remaining_credits(),
            weight: year.weight_fraction(),
        })
    }

    /// Weight share of years not yet started: `1 - sum(year weights) / 100`
    #[must_use]
    pub fn remaining_weight(&self) -> f64 {
        let assigned: u32 = self.years.iter().map(|y| y.year_weight_percentage).sum();
        1.0 - f64::from(assigned) / 100.0
    }
}
