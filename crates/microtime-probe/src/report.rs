//! Rendering of clock readings and resolution results.
//!
//! Text output:
//!
//! ```text
//! microtime.now() = 1700000000000000
//! microtime.nowDouble() = 1700000000.000000
//! microtime.nowStruct() = { sec: 1700000000, usec: 0 }
//!
//! Minimum difference measured: 1 microseconds
//! ```
//!
//! The last line becomes `Error: Unable to measure minimum difference.`
//! when no positive difference was observed.

use crate::clock::ClockProvider;
use crate::resolution::Resolution;
use microtime_common::{Micros, MicrotimeResult, TimeVal};
use serde::Serialize;
use std::io::{self, Write};

/// Message printed when the measurement is inconclusive.
pub const INCONCLUSIVE_MESSAGE: &str = "Error: Unable to measure minimum difference.";

/// One reading from each clock accessor, taken in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readings {
    /// `now()` result.
    pub now: Micros,
    /// `nowDouble()` result.
    pub now_double: f64,
    /// `nowStruct()` result.
    pub now_struct: TimeVal,
}

impl Readings {
    /// Call `now`, `now_double` and `now_struct` once each.
    ///
    /// # Errors
    ///
    /// Propagates clock read failures.
    pub fn capture<C: ClockProvider + ?Sized>(clock: &C) -> MicrotimeResult<Self> {
        Ok(Self {
            now: clock.now()?,
            now_double: clock.now_double()?,
            now_struct: clock.now_struct()?,
        })
    }

    /// Write the three `microtime.*() = value` lines.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "microtime.now() = {}", self.now)?;
        writeln!(out, "microtime.nowDouble() = {:.6}", self.now_double)?;
        writeln!(out, "microtime.nowStruct() = {}", self.now_struct)
    }
}

/// Write the final resolution line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_resolution_text<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    match resolution.min_diff {
        Some(min) => writeln!(out, "Minimum difference measured: {min} microseconds"),
        None => writeln!(out, "{INCONCLUSIVE_MESSAGE}"),
    }
}

/// Summary of a resolution run, as serialized in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    /// Smallest positive difference in microseconds, `null` if none.
    pub min_diff_us: Option<u64>,
    /// Trials performed.
    pub trials: u64,
    /// Trials that fell back to the baseline reading.
    pub fallbacks: u64,
    /// Times the minimum was lowered.
    pub improvements: u64,
    /// Loop duration, humantime formatted.
    pub elapsed: String,
}

impl From<&Resolution> for ResolutionSummary {
    fn from(res: &Resolution) -> Self {
        Self {
            min_diff_us: res.min_diff,
            trials: res.trials,
            fallbacks: res.fallbacks,
            improvements: res.improvements,
            elapsed: humantime::format_duration(res.elapsed).to_string(),
        }
    }
}

/// Complete benchmark result: initial readings plus resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    /// Name of the clock that produced the readings.
    pub clock: String,
    /// Initial readings.
    pub readings: Readings,
    /// Resolution measurement.
    pub resolution: ResolutionSummary,
}

impl BenchReport {
    /// Assemble a report.
    #[must_use]
    pub fn new(clock: &str, readings: Readings, resolution: &Resolution) -> Self {
        Self {
            clock: clock.to_string(),
            readings,
            resolution: ResolutionSummary::from(resolution),
        }
    }

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write readings, a blank separator line, then the resolution line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_text_report<W: Write>(
    out: &mut W,
    readings: &Readings,
    resolution: &Resolution,
) -> io::Result<()> {
    readings.write_text(out)?;
    writeln!(out)?;
    write_resolution_text(out, resolution)
}
