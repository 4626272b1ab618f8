//! Expression core: tokenizing, parsing, evaluation, and the
//! display-buffer accumulator that drives the calculator.

pub mod accumulator;
pub mod evaluator;
mod operations;
pub mod parser;

pub use accumulator::{Accumulator, ERROR_TOKEN};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax or disallowed characters
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Expression reduced to nothing once trailing operators were stripped
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Returns true for failures caused by the expression text itself.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::ParseError(_) | Self::EmptyExpression)
    }

    /// Returns true for failures produced by the arithmetic (non-finite
    /// results such as division by zero or overflow).
    #[must_use]
    pub const fn is_math_error(&self) -> bool {
        !self.is_invalid_input()
    }
}
