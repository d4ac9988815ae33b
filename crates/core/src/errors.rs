//! Core error types for the rateio crates.
//!
//! This module defines a closed set of error kinds so callers can branch
//! on the kind instead of matching message text. The core never recovers
//! from its own errors; the interactive session and the chart binary
//! decide whether to re-prompt or abort.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation core and its callers.
#[derive(Error, Debug)]
pub enum Error {
    /// Allocation was requested over inputs whose total value is zero,
    /// leaving the proportion undefined.
    #[error("invalid allocation input: {0}")]
    InvalidAllocationInput(String),

    /// A numeric string could not be read as a BRL amount.
    #[error("invalid numeric format: {0}")]
    InvalidNumericFormat(String),

    /// A required input file or output target could not be reached.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::InvalidNumericFormat(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
