//! Error types for survey-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Frequency analysis error: {0}")]
    Freq(#[from] survey_freq::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),
}

pub type Result<T> = std::result::Result<T, Error>;
