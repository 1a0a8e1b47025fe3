// ============================================================================
// Pi Series Calculator
// Sums the Ramanujan series under an explicit decimal context
// ============================================================================

use super::series::{constant_multiplier, RamanujanTerm};
use crate::domain::{
    CalculationReport, CalculatorConfig, CalculatorError, CalculatorResult, PiRequest,
};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{
    adjusted_exponent, reciprocal, round, working_context, BigDecimal, ScaledDecimal,
};
use chrono::Utc;
use num_traits::Zero;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Computes pi to a requested number of fractional digits.
///
/// Each evaluation builds its own `bigdecimal::Context` with
/// `precision + margin_digits` significant digits and drops it afterwards,
/// so a single calculator can be shared freely between threads.
pub struct PiSeriesCalculator {
    /// Precision budgeting and rounding
    config: CalculatorConfig,

    /// Event handler for progress events
    event_handler: Arc<dyn EventHandler>,
}

impl PiSeriesCalculator {
    /// Create a calculator from a validated configuration.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails validation.
    pub fn new(config: CalculatorConfig) -> CalculatorResult<Self> {
        config.validate().map_err(CalculatorError::InvalidConfig)?;

        Ok(Self {
            config,
            event_handler: Arc::new(NoOpEventHandler),
        })
    }

    /// Builder method: Attach an event handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Pi summed over `iterations` terms, rounded to `precision` fractional digits.
    ///
    /// # Errors
    /// `InvalidArgument` if either argument is below 1 or out of range.
    ///
    /// # Example
    /// ```
    /// use ramanujan_pi::engine::PiSeriesCalculator;
    ///
    /// let calculator = PiSeriesCalculator::default();
    /// let pi = calculator.compute(2, 10).unwrap();
    /// assert_eq!(pi.to_string(), "3.1415926536");
    /// ```
    pub fn compute(&self, iterations: i64, precision: i64) -> CalculatorResult<ScaledDecimal> {
        let request = self.validate(iterations, precision)?;
        self.evaluate(&request).map(|report| report.value)
    }

    /// Validate raw arguments, reporting rejections to the event handler.
    ///
    /// Besides the range checks of [`PiRequest::new`], the precision plus
    /// the configured margin must fit the working-precision range.
    pub fn validate(&self, iterations: i64, precision: i64) -> CalculatorResult<PiRequest> {
        PiRequest::new(iterations, precision)
            .and_then(|request| self.working_precision(&request).map(|_| request))
            .inspect_err(|err| self.reject(iterations, precision, err))
    }

    fn working_precision(&self, request: &PiRequest) -> CalculatorResult<u32> {
        self.config
            .working_precision(request.precision)
            .ok_or(CalculatorError::InvalidArgument(
                "precision exceeds the supported maximum",
            ))
    }

    fn reject(&self, iterations: i64, precision: i64, err: &CalculatorError) {
        warn!(iterations, precision, error = %err, "Rejected pi request");
        self.event_handler.on_event(CalculationEvent::CalculationRejected {
            reason: err.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Evaluate a validated request and return the full report.
    pub fn evaluate(&self, request: &PiRequest) -> CalculatorResult<CalculationReport> {
        let started = Instant::now();

        let working_precision = self.working_precision(request).inspect_err(|err| {
            self.reject(request.iterations.into(), request.precision.into(), err)
        })?;
        let context = working_context(working_precision, self.config.rounding)?;

        debug!(
            iterations = request.iterations,
            precision = request.precision,
            working_precision,
            rounding = %self.config.rounding,
            "Starting Ramanujan series evaluation"
        );
        self.event_handler.on_event(CalculationEvent::CalculationStarted {
            iterations: request.iterations,
            precision: request.precision,
            working_precision,
            timestamp: Utc::now(),
        });

        let multiplier = constant_multiplier(&context)?;

        let mut sum = BigDecimal::zero();
        let mut last_term_exponent = 0;
        for k in 0..request.iterations {
            let term = RamanujanTerm::new(k)?.evaluate(&context)?;
            last_term_exponent = adjusted_exponent(&term);
            sum = round(&context, &(&sum + &term));

            trace!(k, term_exponent = last_term_exponent, "Added series term");
            self.event_handler.on_event(CalculationEvent::TermAdded {
                index: k,
                term_exponent: last_term_exponent,
                timestamp: Utc::now(),
            });
        }

        let inverse_pi = round(&context, &(&multiplier * &sum));
        let pi = reciprocal(&context, &inverse_pi)?;
        let value = ScaledDecimal::from(pi).quantize(request.precision, self.config.rounding);

        let elapsed = started.elapsed();
        debug!(
            iterations = request.iterations,
            precision = request.precision,
            elapsed_us = elapsed.as_micros() as u64,
            "Finished Ramanujan series evaluation"
        );
        self.event_handler.on_event(CalculationEvent::CalculationFinished {
            value: value.clone(),
            elapsed,
            timestamp: Utc::now(),
        });

        Ok(CalculationReport {
            request: *request,
            working_precision,
            rounding: self.config.rounding,
            value,
            last_term_exponent,
            computed_at: Utc::now(),
            elapsed,
        })
    }
}

impl Default for PiSeriesCalculator {
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }
}

// ============================================================================
// Async Integration
// ============================================================================

#[cfg(feature = "async")]
impl PiSeriesCalculator {
    /// [`compute`](Self::compute) on tokio's blocking pool.
    ///
    /// # Errors
    /// Same as `compute`; a failed join becomes `Runtime`.
    pub async fn compute_async(
        self: Arc<Self>,
        iterations: i64,
        precision: i64,
    ) -> CalculatorResult<ScaledDecimal> {
        tokio::task::spawn_blocking(move || self.compute(iterations, precision))
            .await
            .map_err(|err| CalculatorError::Runtime(err.to_string()))?
    }
}

/// Pi with the default configuration (margin 10, half-even).
pub fn compute(iterations: i64, precision: i64) -> CalculatorResult<ScaledDecimal> {
    PiSeriesCalculator::default().compute(iterations, precision)
}
