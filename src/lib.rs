// ============================================================================
// Ramanujan Pi Library
// Arbitrary-precision pi from Ramanujan's 1/pi series
// ============================================================================

//! # Ramanujan Pi
//!
//! Computes pi to an arbitrary number of decimal places by summing
//!
//! ```text
//! 1/pi = (2·√2 / 9801) · Σ_{k≥0} (4k)! · (1103 + 26390k) / ((k!)^4 · 396^(4k))
//! ```
//!
//! ## Features
//!
//! - **Exact integer terms**: factorials and powers are big integers, never floats
//! - **Explicit decimal contexts**: a `bigdecimal::Context` travels with each
//!   operation, so concurrent calculations never share precision state
//! - **Documented rounding**: round-half-even by default, configurable
//! - **Convergence tables**, sequential or across scoped worker threads
//! - **Event hooks** for progress reporting and logging
//!
//! Each additional term contributes roughly eight more correct digits.
//!
//! ## Example
//!
//! ```rust
//! use ramanujan_pi::prelude::*;
//!
//! let calculator = PiSeriesCalculator::new(CalculatorConfig::default()).unwrap();
//!
//! let pi = calculator.compute(2, 10).unwrap();
//! assert_eq!(pi.to_string(), "3.1415926536");
//!
//! let report = calculator.evaluate(&PiRequest::new(4, 30).unwrap()).unwrap();
//! let comparison = report.compare_with_reference();
//! println!("{} ({} matching digits)", report.value, comparison.matching_digits);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::compute;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculationReport, CalculatorConfig, CalculatorError, CalculatorResult, PiRequest,
        ReferenceComparison,
    };
    pub use crate::engine::{compute, ConvergencePoint, PiSeriesCalculator};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{BigDecimal, RoundingMode, ScaledDecimal};
}
