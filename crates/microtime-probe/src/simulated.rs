//! Deterministic clocks.
//!
//! [`SimulatedClock`] advances by a fixed step per read (a step of zero
//! freezes it). [`ScriptedClock`] replays an explicit list of readings,
//! which is how clock regressions and uneven ticks are reproduced.

use crate::clock::ClockProvider;
use microtime_common::{Micros, MicrotimeResult, TimeVal};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Clock that starts at a given instant and advances by `step` per read.
#[derive(Debug)]
pub struct SimulatedClock {
    next: AtomicU64,
    step: u64,
}

impl SimulatedClock {
    /// Clock that returns `start`, `start + step`, `start + 2*step`, ...
    #[must_use]
    pub fn stepping(start: u64, step: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
            step,
        }
    }

    /// Clock frozen at `value`.
    #[must_use]
    pub fn fixed(value: u64) -> Self {
        Self::stepping(value, 0)
    }

    /// The value the next read will return.
    #[must_use]
    pub fn peek(&self) -> Micros {
        Micros(self.next.load(Ordering::Relaxed))
    }
}

impl ClockProvider for SimulatedClock {
    fn read(&self) -> MicrotimeResult<TimeVal> {
        let value = self.next.fetch_add(self.step, Ordering::Relaxed);
        Ok(Micros::from(value).to_timeval())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// Clock that replays scripted readings, repeating the last one forever.
#[derive(Debug)]
pub struct ScriptedClock {
    readings: Vec<u64>,
    cursor: AtomicUsize,
}

impl ScriptedClock {
    /// Create a clock from readings in microseconds.
    ///
    /// An empty script behaves like a clock frozen at the epoch.
    #[must_use]
    pub fn new(readings: Vec<u64>) -> Self {
        Self {
            readings,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of reads served so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl ClockProvider for ScriptedClock {
    fn read(&self) -> MicrotimeResult<TimeVal> {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed);
        let value = match self.readings.get(idx) {
            Some(v) => *v,
            None => self.readings.last().copied().unwrap_or(0),
        };
        Ok(Micros::from(value).to_timeval())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
