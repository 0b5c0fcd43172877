use thiserror::Error;

/// Error types covering clock reads, timestamp validation, and measurement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MicrotimeError {
    /// The operating system clock could not be read.
    #[error("{syscall} failed: {message} ({code}, errno {errno})")]
    Clock {
        /// Name of the failing system call.
        syscall: String,
        /// Raw OS error number, 0 if none applies.
        errno: i32,
        /// Symbolic errno name, e.g. `EINVAL`.
        code: String,
        /// Human readable description.
        message: String,
    },

    /// A seconds/microseconds pair with an out of range remainder.
    #[error("invalid timeval: usec {usec} is not in [0, 999999]")]
    InvalidTimeVal {
        /// The rejected microsecond remainder.
        usec: u64,
    },

    /// Configuration or validation error.
    #[error("configuration error: {0}")]
    Config(String),

    /// No positive clock difference was observed within the trial budget.
    #[error("unable to measure minimum difference after {trials} trials")]
    MeasurementInconclusive {
        /// Number of trials that ran.
        trials: u64,
    },
}

/// Convenience type alias for microtime operations.
pub type MicrotimeResult<T> = Result<T, MicrotimeError>;
