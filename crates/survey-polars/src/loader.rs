//! Survey dataset loading

use std::path::Path;

use polars::prelude::*;

use crate::Result;

/// Read a survey dataset from a CSV file into a DataFrame
///
/// The first row is taken as the header; column dtypes are inferred. Empty
/// cells become nulls, which the analysis treats as missing responses. The
/// dataset is loaded once at startup and treated as immutable afterwards, so
/// a load failure is a fatal startup error for the caller — there is nothing
/// to retry.
pub fn read_survey_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    tracing::info!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "loaded survey dataset"
    );
    Ok(df)
}
