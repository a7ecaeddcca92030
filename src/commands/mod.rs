//! Command implementations

pub mod check;
pub mod simple;
pub mod solve;
pub mod survey;

pub use check::{CheckResult, CheckedWord, check_words};
pub use simple::run_simple;
pub use solve::{SolveResult, playable_words};
pub use survey::{RootSummary, SurveyStatistics, print_survey_statistics, run_survey};
