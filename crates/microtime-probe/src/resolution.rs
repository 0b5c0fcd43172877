//! Smallest observable clock step.
//!
//! Reads the clock twice back to back, many times, and keeps the smallest
//! strictly positive difference. When a pair reads equal (same tick) or
//! goes backwards, the difference is taken against the reading made
//! before the loop started instead.
//!
//! The loop bound starts at [`TrialBudget::initial`]. Each time a new
//! minimum is recorded the bound becomes [`TrialBudget::reduced`]; the
//! trial counter is not reset, so a minimum first found after `reduced`
//! trials ends the loop right away.

use crate::clock::ClockProvider;
use microtime_common::{MicrotimeError, MicrotimeResult, TrialBudget};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Outcome of a resolution measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Smallest positive difference seen, in microseconds.
    pub min_diff: Option<u64>,
    /// Trials (pairs of reads) performed.
    pub trials: u64,
    /// Trials whose pair difference was not positive.
    pub fallbacks: u64,
    /// Times the running minimum was lowered.
    pub improvements: u64,
    /// Wall time spent in the loop.
    pub elapsed: Duration,
}

impl Resolution {
    /// Whether any positive difference was observed.
    #[must_use]
    pub fn is_conclusive(&self) -> bool {
        self.min_diff.is_some()
    }

    /// The measured minimum, or an inconclusive-measurement error.
    ///
    /// # Errors
    ///
    /// Returns [`MicrotimeError::MeasurementInconclusive`] if no positive
    /// difference was observed.
    pub fn into_result(self) -> MicrotimeResult<u64> {
        self.min_diff
            .ok_or(MicrotimeError::MeasurementInconclusive {
                trials: self.trials,
            })
    }
}

/// Measure the smallest positive difference between consecutive clock reads.
///
/// # Errors
///
/// Only clock read failures are errors. A run that never sees a positive
/// difference returns `Ok` with `min_diff == None`.
pub fn measure_resolution<C>(clock: &C, budget: &TrialBudget) -> MicrotimeResult<Resolution>
where
    C: ClockProvider + ?Sized,
{
    let started = Instant::now();
    let start = clock.now()?;

    let mut min_diff: Option<u64> = None;
    let mut limit = budget.initial;
    let mut trials = 0u64;
    let mut fallbacks = 0u64;
    let mut improvements = 0u64;

    while trials < limit {
        trials += 1;

        let a = clock.now()?;
        let b = clock.now()?;

        let diff = match b.micros_since(a) {
            Some(d) if d > 0 => d,
            _ => {
                fallbacks += 1;
                b.micros_since(start).unwrap_or(0)
            }
        };

        if diff > 0 && min_diff.map_or(true, |min| diff < min) {
            debug!(trial = trials, diff_us = diff, "new minimum difference");
            min_diff = Some(diff);
            improvements += 1;
            limit = budget.reduced;
        }
    }

    let resolution = Resolution {
        min_diff,
        trials,
        fallbacks,
        improvements,
        elapsed: started.elapsed(),
    };

    match resolution.min_diff {
        Some(min) => info!(
            clock = clock.name(),
            min_diff_us = min,
            trials,
            fallbacks,
            elapsed = %humantime::format_duration(resolution.elapsed),
            "clock resolution measured"
        ),
        None => warn!(
            clock = clock.name(),
            trials, "no positive clock difference observed"
        ),
    }

    Ok(resolution)
}
