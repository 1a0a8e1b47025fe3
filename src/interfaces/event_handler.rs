// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculation progress
// ============================================================================

use crate::numeric::ScaledDecimal;
use chrono::{DateTime, Utc};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the pi calculator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Arguments validated, context established
    CalculationStarted {
        iterations: u32,
        precision: u32,
        working_precision: u32,
        timestamp: DateTime<Utc>,
    },

    /// Arguments rejected before any arithmetic
    CalculationRejected {
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Series term k added into the running sum
    TermAdded {
        index: u32,
        /// Power of ten of the term's leading digit
        term_exponent: i64,
        timestamp: DateTime<Utc>,
    },

    /// Final value produced
    CalculationFinished {
        value: ScaledDecimal,
        elapsed: Duration,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, progress display, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
