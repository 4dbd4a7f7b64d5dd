//! Frequency analysis over DataFrame columns

use polars::prelude::*;
use survey_freq::ColumnAnalysis;

use crate::{Error, Result, SurveyStatsExt};

impl SurveyStatsExt for DataFrame {
    fn analyze_column(&self, column: &str) -> Result<ColumnAnalysis> {
        let col = self
            .column(column)
            .map_err(|_| Error::InvalidColumn(column.to_string()))?;
        Ok(survey_freq::analyze(extract_categories(col)?)?)
    }
}

/// Extract a column as optional category strings
///
/// Nulls are missing responses. Float columns additionally treat NaN as
/// missing, since blank spreadsheet cells surface as NaN through some load
/// paths. Every other dtype is cast to its string representation; categories
/// compare exactly, with no trimming or case folding.
fn extract_categories(column: &Column) -> Result<Vec<Option<String>>> {
    match column.dtype() {
        DataType::Float32 | DataType::Float64 => {
            let float = column.cast(&DataType::Float64)?;
            let ca = float.f64()?;
            Ok(ca
                .into_iter()
                .map(|value| value.filter(|x| !x.is_nan()).map(|x| x.to_string()))
                .collect())
        }
        _ => {
            let strings = column.cast(&DataType::String)?;
            let ca = strings.str()?;
            Ok(ca.into_iter().map(|value| value.map(String::from)).collect())
        }
    }
}
