// ============================================================================
// Pi Request
// Validated (iterations, precision) pair
// ============================================================================

use super::errors::{CalculatorError, CalculatorResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated calculation request.
///
/// Both fields are at least 1. Construction rejects out-of-range values;
/// nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PiRequest {
    /// Number of series terms, k = 0..iterations-1
    pub iterations: u32,
    /// Decimal digits after the point in the result
    pub precision: u32,
}

impl PiRequest {
    /// Validate raw integer arguments.
    ///
    /// # Errors
    /// `InvalidArgument` if either value is below 1 or above `u32::MAX`.
    pub fn new(iterations: i64, precision: i64) -> CalculatorResult<Self> {
        let iterations = Self::positive(
            iterations,
            "iterations must be at least 1",
            "iterations exceeds the supported maximum",
        )?;
        let precision = Self::positive(
            precision,
            "precision must be at least 1",
            "precision exceeds the supported maximum",
        )?;

        Ok(Self {
            iterations,
            precision,
        })
    }

    fn positive(value: i64, too_small: &'static str, too_large: &'static str) -> CalculatorResult<u32> {
        if value < 1 {
            return Err(CalculatorError::InvalidArgument(too_small));
        }
        u32::try_from(value).map_err(|_| CalculatorError::InvalidArgument(too_large))
    }
}
