//! Wall clock backed by the operating system.
//!
//! On unix the default source is `gettimeofday(2)`, which reports
//! microseconds natively. `CLOCK_REALTIME` via `clock_gettime(2)` is
//! available as an alternative and is truncated to whole microseconds.
//! Other targets read `std::time::SystemTime` for both sources.

use crate::clock::ClockProvider;
use microtime_common::{ClockSource, MicrotimeError, MicrotimeResult, TimeVal};

/// OS wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    source: ClockSource,
}

impl SystemClock {
    /// Create a clock reading from `source`.
    #[must_use]
    pub const fn new(source: ClockSource) -> Self {
        Self { source }
    }

    /// The configured clock source.
    #[must_use]
    pub const fn source(&self) -> ClockSource {
        self.source
    }
}

impl ClockProvider for SystemClock {
    fn read(&self) -> MicrotimeResult<TimeVal> {
        match self.source {
            ClockSource::Gettimeofday => read_gettimeofday(),
            ClockSource::Realtime => read_realtime(),
        }
    }

    fn name(&self) -> &str {
        match self.source {
            ClockSource::Gettimeofday => "gettimeofday",
            ClockSource::Realtime => "realtime",
        }
    }
}

/// Clock error for `syscall` failing with `errno`.
#[cfg(unix)]
fn errno_error(syscall: &str, errno: nix::errno::Errno) -> MicrotimeError {
    MicrotimeError::Clock {
        syscall: syscall.to_string(),
        errno: errno as i32,
        code: format!("{errno:?}"),
        message: errno.desc().to_string(),
    }
}

/// Convert signed OS seconds/microseconds into a [`TimeVal`].
#[cfg(unix)]
fn timeval_from_parts(syscall: &str, sec: i64, usec: i64) -> MicrotimeResult<TimeVal> {
    let (Ok(sec), Ok(usec)) = (u64::try_from(sec), u64::try_from(usec)) else {
        let errno = nix::errno::Errno::EINVAL;
        return Err(MicrotimeError::Clock {
            syscall: syscall.to_string(),
            errno: errno as i32,
            code: format!("{errno:?}"),
            message: format!("time {sec}s {usec}us is before the Unix epoch"),
        });
    };
    TimeVal::new(sec, usec)
}

#[cfg(unix)]
#[allow(clippy::useless_conversion)]
fn read_gettimeofday() -> MicrotimeResult<TimeVal> {
    let mut tv = std::mem::MaybeUninit::<libc::timeval>::zeroed();

    // SAFETY: `tv` points to writable storage for one `timeval`; a null
    // timezone pointer is permitted.
    let result = unsafe { libc::gettimeofday(tv.as_mut_ptr(), std::ptr::null_mut()) };
    if result < 0 {
        return Err(errno_error("gettimeofday", nix::errno::Errno::last()));
    }

    // SAFETY: gettimeofday succeeded and filled in the struct.
    let tv = unsafe { tv.assume_init() };
    timeval_from_parts("gettimeofday", i64::from(tv.tv_sec), i64::from(tv.tv_usec))
}

#[cfg(unix)]
#[allow(clippy::useless_conversion)]
fn read_realtime() -> MicrotimeResult<TimeVal> {
    use nix::time::{clock_gettime, ClockId};

    let ts = clock_gettime(ClockId::CLOCK_REALTIME)
        .map_err(|errno| errno_error("clock_gettime", errno))?;

    timeval_from_parts(
        "clock_gettime",
        i64::from(ts.tv_sec()),
        i64::from(ts.tv_nsec()) / 1_000,
    )
}

#[cfg(not(unix))]
fn read_system_time(syscall: &str) -> MicrotimeResult<TimeVal> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| MicrotimeError::Clock {
            syscall: syscall.to_string(),
            errno: 0,
            code: "EINVAL".to_string(),
            message: e.to_string(),
        })?;
    TimeVal::new(elapsed.as_secs(), u64::from(elapsed.subsec_micros()))
}

#[cfg(not(unix))]
fn read_gettimeofday() -> MicrotimeResult<TimeVal> {
    read_system_time("gettimeofday")
}

#[cfg(not(unix))]
fn read_realtime() -> MicrotimeResult<TimeVal> {
    read_system_time("clock_gettime")
}
