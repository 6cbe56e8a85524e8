//! Error types for the ev-trends library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur during loading, cleaning, or trend fitting.
#[derive(Error, Debug)]
pub enum TrendError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Too few distinct data points for the requested fit.
    #[error("insufficient data: need at least {needed} distinct years, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// The least-squares system is singular or near-singular.
    #[error("numerical fit failure: {0}")]
    NumericalFit(String),

    /// A model-year value that is not an integer reached the pipeline.
    #[error("invalid model year {value:?} on line {line}")]
    InvalidYear { value: String, line: u64 },

    /// A required column is absent from the CSV header.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between paired inputs.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Underlying CSV parse failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
