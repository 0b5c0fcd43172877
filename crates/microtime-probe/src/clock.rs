//! Clock provider abstraction.

use microtime_common::{Micros, MicrotimeResult, TimeVal};

/// Source of wall-clock readings with microsecond precision.
///
/// Implementors supply [`read`](ClockProvider::read); the three accessors
/// each perform one read and convert it. Every call is a fresh reading.
pub trait ClockProvider {
    /// Read the clock once.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying clock cannot be read.
    fn read(&self) -> MicrotimeResult<TimeVal>;

    /// Current time as integer microseconds since the epoch.
    ///
    /// # Errors
    ///
    /// Propagates [`read`](ClockProvider::read) failures.
    fn now(&self) -> MicrotimeResult<Micros> {
        self.read().map(Micros::from)
    }

    /// Current time as fractional seconds since the epoch.
    ///
    /// # Errors
    ///
    /// Propagates [`read`](ClockProvider::read) failures.
    fn now_double(&self) -> MicrotimeResult<f64> {
        self.read().map(|tv| tv.as_secs_f64())
    }

    /// Current time as a seconds/microseconds pair.
    ///
    /// # Errors
    ///
    /// Propagates [`read`](ClockProvider::read) failures.
    fn now_struct(&self) -> MicrotimeResult<TimeVal> {
        self.read()
    }

    /// Short name used in logs and reports.
    fn name(&self) -> &str {
        "clock"
    }
}

impl<C: ClockProvider + ?Sized> ClockProvider for &C {
    fn read(&self) -> MicrotimeResult<TimeVal> {
        (**self).read()
    }

    fn now(&self) -> MicrotimeResult<Micros> {
        (**self).now()
    }

    fn now_double(&self) -> MicrotimeResult<f64> {
        (**self).now_double()
    }

    fn now_struct(&self) -> MicrotimeResult<TimeVal> {
        (**self).now_struct()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: ClockProvider + ?Sized> ClockProvider for Box<C> {
    fn read(&self) -> MicrotimeResult<TimeVal> {
        (**self).read()
    }

    fn now(&self) -> MicrotimeResult<Micros> {
        (**self).now()
    }

    fn now_double(&self) -> MicrotimeResult<f64> {
        (**self).now_double()
    }

    fn now_struct(&self) -> MicrotimeResult<TimeVal> {
        (**self).now_struct()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
