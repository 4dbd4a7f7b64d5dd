//! Core trait for survey analysis on Polars DataFrames

use survey_freq::ColumnAnalysis;

use crate::Result;

/// Extension trait for categorical survey analysis on Polars DataFrames
pub trait SurveyStatsExt {
    /// Analyze one survey column
    ///
    /// # Arguments
    /// * `column` - Column name to analyze
    ///
    /// # Returns
    /// The column's frequency table, sample size, and uniform goodness-of-fit
    /// p-value. Fails with [`crate::Error::InvalidColumn`] when the column is
    /// not part of the dataset schema.
    fn analyze_column(&self, column: &str) -> Result<ColumnAnalysis>;
}
