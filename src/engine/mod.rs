// ============================================================================
// Engine Module
// Series evaluation and the pi calculator
// ============================================================================

mod calculator;
mod convergence;

pub mod series;

pub use calculator::{compute, PiSeriesCalculator};
pub use convergence::ConvergencePoint;
pub use series::{constant_multiplier, factorial, RamanujanTerm};
