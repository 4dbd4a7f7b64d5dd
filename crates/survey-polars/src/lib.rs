//! Polars integration for categorical survey analysis
//!
//! This crate wires the pure `survey-freq` core to Polars DataFrames through
//! a single extension trait, plus the surrounding plumbing a survey report
//! needs: a CSV loader, an ordered column-set configuration, and a
//! precomputed per-column results report with pure lookups.
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_polars::{read_survey_csv, AnalysisReport, ColumnSet, SurveyStatsExt};
//!
//! let df = read_survey_csv("survey.csv")?;
//!
//! // One column at a time...
//! let gender = df.analyze_column("Gender")?;
//! println!("{} — {}", gender.label("Gender"), gender.p_value());
//!
//! // ...or precompute the whole report once after load
//! let columns = ColumnSet::new(["Gender", "Age Group", "Occupation"]);
//! let report = AnalysisReport::build(&df, &columns)?;
//! for column in report.columns() {
//!     let analysis = report.get(column).unwrap();
//!     println!("{}: {} categories", column, analysis.table().len());
//! }
//! ```

mod config;
mod error;
mod loader;
mod methods;
mod report;
mod traits;

pub use config::ColumnSet;
pub use error::{Error, Result};
pub use loader::read_survey_csv;
pub use report::AnalysisReport;
pub use traits::SurveyStatsExt;

// Re-export the core result types consumed through this crate's API
pub use survey_freq::{ColumnAnalysis, FrequencyRow, FrequencyTable, PValue};
