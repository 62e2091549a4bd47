use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Could not draw a unique value for `{field}` after {attempts} attempts")]
    GenerationExhausted { field: String, attempts: usize },
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

impl FixtureError {
    /// True for the failures that come from the output sink rather than from generation.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, FixtureError::CsvError(_) | FixtureError::IoError(_))
    }
}
