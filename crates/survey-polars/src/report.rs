//! Precomputed per-column analysis results

use std::collections::HashMap;

use polars::prelude::*;
use survey_freq::ColumnAnalysis;

use crate::{ColumnSet, Error, Result, SurveyStatsExt};

/// Precomputed survey analysis, one result per configured column
///
/// Built once after the dataset is loaded; lookups are pure and the report
/// never changes afterwards, so it can be shared freely across concurrent
/// readers without locking. Configured columns absent from the dataset are
/// skipped at build time with a warning; looking one up later yields `None`,
/// which a presentation layer renders as its "no data available" state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    columns: Vec<String>,
    results: HashMap<String, ColumnAnalysis>,
}

impl AnalysisReport {
    /// Analyze every configured column present in the dataset
    pub fn build(df: &DataFrame, columns: &ColumnSet) -> Result<Self> {
        let mut present = Vec::new();
        let mut results = HashMap::new();

        for name in columns.names() {
            match df.analyze_column(name) {
                Ok(analysis) => {
                    tracing::debug!(column = name, n = analysis.sample_size(), "analyzed column");
                    present.push(name.to_string());
                    results.insert(name.to_string(), analysis);
                }
                Err(Error::InvalidColumn(column)) => {
                    tracing::warn!(
                        column = %column,
                        "configured column not present in dataset; skipping"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Self {
            columns: present,
            results,
        })
    }

    /// Look up the analysis for a column, if it made it into the report
    pub fn get(&self, column: &str) -> Option<&ColumnAnalysis> {
        self.results.get(column)
    }

    /// Column names in configured order, restricted to columns that were
    /// present in the dataset
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Display label for a column, e.g. `"Gender (N=87)"`
    pub fn label(&self, column: &str) -> Option<String> {
        self.get(column).map(|analysis| analysis.label(column))
    }

    /// Get the number of analyzed columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no configured column was present
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
