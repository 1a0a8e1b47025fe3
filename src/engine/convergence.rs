// ============================================================================
// Convergence Tables
// Accuracy of the series as a function of the number of terms
// ============================================================================

use super::calculator::PiSeriesCalculator;
use crate::domain::{CalculatorError, CalculatorResult, PiRequest};
use crate::numeric::ScaledDecimal;
use crossbeam::channel;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a convergence table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergencePoint {
    /// Number of series terms summed
    pub iterations: u32,
    /// Rounded value of pi
    pub value: ScaledDecimal,
    /// Leading fractional digits shared with pi
    pub matching_digits: u32,
    /// |value - reference| at the same precision
    pub absolute_error: ScaledDecimal,
}

impl PiSeriesCalculator {
    /// Evaluate 1..=max_iterations terms at a fixed precision, in order.
    pub fn convergence(&self, max_iterations: i64, precision: i64) -> CalculatorResult<Vec<ConvergencePoint>> {
        let last = self.validate(max_iterations, precision)?;

        (1..=last.iterations)
            .map(|iterations| {
                self.convergence_point(PiRequest {
                    iterations,
                    precision: last.precision,
                })
            })
            .collect()
    }

    /// Same table as [`convergence`](Self::convergence), computed by
    /// `workers` scoped threads pulling iteration counts from a shared queue.
    ///
    /// # Errors
    /// `InvalidArgument` for zero workers or invalid arguments, `Runtime` if
    /// a worker panics.
    pub fn convergence_parallel(
        &self,
        max_iterations: i64,
        precision: i64,
        workers: usize,
    ) -> CalculatorResult<Vec<ConvergencePoint>> {
        if workers == 0 {
            return Err(CalculatorError::InvalidArgument("workers must be at least 1"));
        }
        let last = self.validate(max_iterations, precision)?;
        let workers = workers.min(last.iterations as usize);

        let (job_tx, job_rx) = channel::unbounded::<u32>();
        let (result_tx, result_rx) = channel::unbounded();
        for iterations in 1..=last.iterations {
            job_tx
                .send(iterations)
                .map_err(|_| CalculatorError::Runtime("job queue closed".to_string()))?;
        }
        drop(job_tx);

        debug!(
            max_iterations = last.iterations,
            precision = last.precision,
            workers,
            "Computing convergence table in parallel"
        );

        crossbeam::scope(|scope| {
            for _ in 0..workers {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                scope.spawn(move |_| {
                    for iterations in jobs.iter() {
                        let point = self.convergence_point(PiRequest {
                            iterations,
                            precision: last.precision,
                        });
                        if results.send(point).is_err() {
                            break;
                        }
                    }
                });
            }
        })
        .map_err(|_| CalculatorError::Runtime("convergence worker panicked".to_string()))?;
        drop(result_tx);

        let mut points = result_rx.iter().collect::<CalculatorResult<Vec<_>>>()?;
        points.sort_by_key(|point| point.iterations);
        Ok(points)
    }

    fn convergence_point(&self, request: PiRequest) -> CalculatorResult<ConvergencePoint> {
        let report = self.evaluate(&request)?;
        let comparison = report.compare_with_reference();

        Ok(ConvergencePoint {
            iterations: request.iterations,
            value: report.value,
            matching_digits: comparison.matching_digits,
            absolute_error: comparison.absolute_error,
        })
    }
}
