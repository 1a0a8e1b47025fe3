// ============================================================================
// Calculator Configuration
// Precision budgeting and rounding behaviour for pi calculations
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Guard digits carried beyond the requested precision by default
pub const DEFAULT_MARGIN_DIGITS: u32 = 10;

/// Smallest margin accepted by [`CalculatorConfig::validate`]
pub const MIN_MARGIN_DIGITS: u32 = 10;

/// Configuration for a [`PiSeriesCalculator`](crate::engine::PiSeriesCalculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Extra significant digits carried during summation and division.
    /// Working precision = requested precision + margin.
    pub margin_digits: u32,

    /// Rounding used by the working context and by the final quantize
    pub rounding: RoundingMode,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            margin_digits: DEFAULT_MARGIN_DIGITS,
            rounding: RoundingMode::HalfEven,
        }
    }
}

impl CalculatorConfig {
    /// Create a new configuration
    pub fn new(margin_digits: u32, rounding: RoundingMode) -> Self {
        Self {
            margin_digits,
            rounding,
        }
    }

    /// Builder method: Set margin digits
    pub fn with_margin_digits(mut self, margin_digits: u32) -> Self {
        self.margin_digits = margin_digits;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.margin_digits < MIN_MARGIN_DIGITS {
            return Err(format!(
                "Margin must be at least {} digits, got {}",
                MIN_MARGIN_DIGITS, self.margin_digits
            ));
        }

        Ok(())
    }

    /// Working precision for a requested number of fractional digits.
    ///
    /// Returns `None` when the sum does not fit in `u32`.
    pub fn working_precision(&self, precision: u32) -> Option<u32> {
        precision.checked_add(self.margin_digits)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Truncating output: digits past the requested precision are dropped
    /// rather than rounded, so every printed digit is a digit of the
    /// working-precision result.
    pub fn truncating() -> Self {
        Self::default().with_rounding(RoundingMode::Down)
    }
}
