//! Frequency distributions and goodness-of-fit testing for categorical survey data
//!
//! This crate is the pure core of the survey-stats workspace: it turns one
//! column of categorical responses into a frequency table, a sample size, and
//! a chi-square goodness-of-fit p-value against a uniform null. It performs no
//! I/O and holds no state; dataset loading and DataFrame integration live in
//! `survey-polars`.
//!
//! # Key Features
//!
//! - **Missing-value policy**: absent responses are dropped before counting,
//!   never represented as a category
//! - **Deterministic ordering**: rows sort by descending frequency, ties keep
//!   first-observed order
//! - **Uniform goodness-of-fit**: one-way chi-square test with `k - 1` degrees
//!   of freedom, p-value from the chi-square CDF
//! - **Presentation-ready**: result types serialize directly into the
//!   table/label/chart contract of a rendering layer
//!
//! # Examples
//!
//! ## Analyzing a column
//!
//! ```rust
//! use survey_freq::analyze;
//!
//! let responses = vec![
//!     Some("Female"),
//!     Some("Male"),
//!     Some("Female"),
//!     None, // skipped question
//!     Some("Female"),
//! ];
//! let analysis = analyze(responses).unwrap();
//!
//! assert_eq!(analysis.sample_size(), 4);
//! assert_eq!(analysis.table().rows()[0].category, "Female");
//! assert_eq!(analysis.table().rows()[0].percent, 75.0);
//! assert!(analysis.p_value().is_computable());
//! ```
//!
//! ## Running the test directly on counts
//!
//! ```rust
//! use survey_freq::chi_square_uniform;
//!
//! let gof = chi_square_uniform(&[10, 20, 30]).unwrap();
//! assert_eq!(gof.degrees_of_freedom(), 2);
//! assert!((gof.statistic() - 10.0).abs() < 1e-12);
//! ```

pub mod analysis;
pub mod error;
pub mod gof;
pub mod types;

// Re-export main types and operations
pub use analysis::analyze;
pub use error::{Error, Result};
pub use gof::{chi_square_uniform, GoodnessOfFit};
pub use types::{ColumnAnalysis, FrequencyRow, FrequencyTable, PValue};
