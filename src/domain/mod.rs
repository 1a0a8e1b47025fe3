// ============================================================================
// Domain Models Module
// Configuration, requests, results and reference data
// ============================================================================

pub mod config;
pub mod errors;
pub mod reference;
pub mod report;
pub mod request;

pub use config::{CalculatorConfig, DEFAULT_MARGIN_DIGITS, MIN_MARGIN_DIGITS};
pub use errors::{CalculatorError, CalculatorResult};
pub use reference::{known_pi, matching_digits, ReferenceComparison, KNOWN_PI};
pub use report::CalculationReport;
pub use request::PiRequest;
