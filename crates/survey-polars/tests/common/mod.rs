//! Common test utilities for survey-polars tests

use polars::prelude::*;

/// Helper function to build a single-column survey DataFrame from optional
/// string responses (None = missing)
pub fn survey_df(column: &str, values: &[Option<&str>]) -> DataFrame {
    let values: Vec<Option<String>> = values.iter().map(|v| v.map(String::from)).collect();
    DataFrame::new(vec![Series::new(PlSmallStr::from(column), values).into()]).unwrap()
}
