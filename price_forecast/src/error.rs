//! Error types for the price_forecast crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The input series has no points
    #[error("Empty series: {0}")]
    EmptySeries(String),

    /// The requested forecast horizon is not positive
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    /// Too few observations for the requested operation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Zero variance in the independent variable
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Upstream data retrieval failed
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}

impl From<trend_math::MathError> for ForecastError {
    fn from(err: trend_math::MathError) -> Self {
        match err {
            trend_math::MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            trend_math::MathError::DegenerateInput(msg) => ForecastError::DegenerateInput(msg),
            other => ForecastError::MathError(other.to_string()),
        }
    }
}
