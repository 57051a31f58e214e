//! Data models for `GradeForecast`
//!
//! Three layers compose bottom-up: assessments roll up into a module score, modules
//! into a credit-weighted year score, and years into a weighted degree score.

pub mod assessment;
pub mod degree;
pub mod module;
pub mod year;

pub use assessment::{AssessmentKind, ModuleAssessment};
pub use degree::{Degree, DegreeScore, InProgressStats};
pub use module::Module;
pub use year::{UniversityYear, YearScore, FULL_YEAR_CREDITS};
