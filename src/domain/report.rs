// ============================================================================
// Calculation Report
// Result of one evaluation plus the parameters that produced it
// ============================================================================

use super::reference::ReferenceComparison;
use super::request::PiRequest;
use crate::numeric::{RoundingMode, ScaledDecimal};
use chrono::{DateTime, Utc};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single series evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationReport {
    /// Validated arguments
    pub request: PiRequest,

    /// Significant digits carried during the summation
    pub working_precision: u32,

    /// Rounding applied in the working context and to the output
    pub rounding: RoundingMode,

    /// Pi with exactly `request.precision` fractional digits
    pub value: ScaledDecimal,

    /// Power of ten of the last term added to the sum.
    /// Roughly how far the series had converged.
    pub last_term_exponent: i64,

    /// Completion time
    pub computed_at: DateTime<Utc>,

    /// Wall time spent in the evaluation
    pub elapsed: Duration,
}

impl CalculationReport {
    /// Compare the value against the reference digits of pi.
    pub fn compare_with_reference(&self) -> ReferenceComparison {
        ReferenceComparison::new(&self.value, self.request.precision)
    }
}
