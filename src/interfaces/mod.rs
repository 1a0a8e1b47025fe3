// ============================================================================
// Interfaces Module
// Event hooks for calculation progress
// ============================================================================

mod event_handler;

pub use event_handler::{CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
