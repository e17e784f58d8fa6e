//! # Trend Math
//!
//! Numeric building blocks for trend analysis: polynomial values in the
//! monomial basis and ordinary least-squares polynomial fitting.

use thiserror::Error;

pub mod least_squares;
pub mod polynomial;

/// Errors that can occur in trend-fitting calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
