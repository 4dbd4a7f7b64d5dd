//! Frequency distributions and goodness-of-fit analysis for categorical
//! survey data
//!
//! This is the umbrella crate of the survey-stats workspace. The pure
//! analysis core lives in [`survey_freq`]; DataFrame loading, column-set
//! configuration, and the precomputed analysis report live in
//! [`survey_polars`]. Both are re-exported here.

pub use survey_freq;
pub use survey_polars;

// Commonly used items
pub use survey_freq::{
    analyze, chi_square_uniform, ColumnAnalysis, FrequencyRow, FrequencyTable, GoodnessOfFit,
    PValue,
};
pub use survey_polars::{read_survey_csv, AnalysisReport, ColumnSet, SurveyStatsExt};
