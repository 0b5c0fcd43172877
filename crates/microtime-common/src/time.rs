//! Microsecond timestamp representations.
//!
//! A reading of the wall clock can be expressed three ways:
//! - [`Micros`] - integer microseconds since the Unix epoch
//! - `f64` seconds since the epoch, sub-second part in the fraction
//! - [`TimeVal`] - whole seconds plus a microsecond remainder
//!
//! All three describe the same instant and convert losslessly between
//! `Micros` and `TimeVal`. The `f64` form loses precision past ~2^53 µs.

use crate::error::{MicrotimeError, MicrotimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Microseconds per second.
pub const MICROS_PER_SEC: u64 = 1_000_000;

/// Integer microseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Micros(pub u64);

impl Micros {
    /// The epoch itself.
    pub const EPOCH: Micros = Micros(0);

    /// Raw microsecond count.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Microseconds elapsed from `earlier` to `self`.
    ///
    /// Returns `None` if `earlier` is later than `self` (the clock went back).
    #[must_use]
    pub fn micros_since(self, earlier: Micros) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    /// Fractional seconds since the epoch.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.to_timeval().as_secs_f64()
    }

    /// Split into whole seconds and microsecond remainder.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_timeval(self) -> TimeVal {
        TimeVal {
            sec: self.0 / MICROS_PER_SEC,
            usec: (self.0 % MICROS_PER_SEC) as u32,
        }
    }
}

impl From<u64> for Micros {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<TimeVal> for Micros {
    fn from(tv: TimeVal) -> Self {
        tv.as_micros()
    }
}

impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seconds and microseconds since the Unix epoch, `usec` in `[0, 999_999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TimeVal {
    sec: u64,
    usec: u32,
}

impl TimeVal {
    /// Create a `TimeVal`, rejecting remainders of a second or more.
    ///
    /// # Errors
    ///
    /// Returns [`MicrotimeError::InvalidTimeVal`] if `usec` is out of range.
    pub fn new(sec: u64, usec: u64) -> MicrotimeResult<Self> {
        if usec >= MICROS_PER_SEC {
            return Err(MicrotimeError::InvalidTimeVal { usec });
        }
        let usec = u32::try_from(usec).map_err(|_| MicrotimeError::InvalidTimeVal { usec })?;
        Ok(Self { sec, usec })
    }

    /// Whole seconds since the epoch.
    #[must_use]
    pub const fn sec(&self) -> u64 {
        self.sec
    }

    /// Microsecond remainder.
    #[must_use]
    pub const fn usec(&self) -> u32 {
        self.usec
    }

    /// Total microseconds since the epoch (saturating).
    #[must_use]
    pub const fn as_micros(&self) -> Micros {
        Micros(
            self.sec
                .saturating_mul(MICROS_PER_SEC)
                .saturating_add(self.usec as u64),
        )
    }

    /// Fractional seconds: `sec + usec * 0.000001`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        self.sec as f64 + f64::from(self.usec) * 0.000_001
    }
}

impl fmt::Display for TimeVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ sec: {}, usec: {} }}", self.sec, self.usec)
    }
}
