// ============================================================================
// Numeric Module
// Decimal contexts and result values on top of bigdecimal
// ============================================================================
//
// This module provides:
// - Context operations: working_context, round, divide, reciprocal, square_root
// - RoundingMode: Down, HalfUp, HalfEven, mapped onto bigdecimal's modes
// - ScaledDecimal: plain-notation wrapper for fixed-scale results
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - No process-wide precision state; a Context is passed to every operation
// - All fallible operations return Result (no panics)

mod context;
mod errors;
mod scaled_decimal;

pub use bigdecimal::{BigDecimal, Context};
pub use context::{divide, reciprocal, round, square_root, working_context, RoundingMode};
pub use errors::{NumericError, NumericResult};
pub use scaled_decimal::{adjusted_exponent, ScaledDecimal};
