// ============================================================================
// Calculator Errors
// Error types surfaced by the pi calculator
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors returned by calculator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Request argument out of range (iterations, precision, worker count)
    InvalidArgument(&'static str),
    /// Calculator configuration rejected by validation
    InvalidConfig(String),
    /// Arithmetic failure inside the decimal context
    Numeric(NumericError),
    /// Failure outside the arithmetic (worker panic, task join error)
    Runtime(String),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            CalculatorError::InvalidConfig(reason) => {
                write!(f, "invalid configuration: {}", reason)
            },
            CalculatorError::Numeric(err) => write!(f, "arithmetic error: {}", err),
            CalculatorError::Runtime(reason) => write!(f, "runtime failure: {}", reason),
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculatorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for CalculatorError {
    fn from(err: NumericError) -> Self {
        CalculatorError::Numeric(err)
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
