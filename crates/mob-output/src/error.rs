//! Error types for mob-output.

use mob_model::ModelError;
use thiserror::Error;

/// Errors that can occur when writing trace output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("sampling interval must be positive and finite, got {0}")]
    InvalidInterval(f64),

    #[error("could not sample the scenario: {0}")]
    Sampling(#[from] ModelError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
