//! Clock providers and clock resolution measurement.
//!
//! - [`clock`] - the [`ClockProvider`] seam and its three accessors
//! - [`system`] - wall clock backed by the operating system
//! - [`simulated`] - deterministic clocks for tests and dry runs
//! - [`resolution`] - smallest observable clock step
//! - [`report`] - text and JSON rendering of readings and results

pub mod clock;
pub mod report;
pub mod resolution;
pub mod simulated;
pub mod system;

pub use clock::ClockProvider;
pub use report::{BenchReport, Readings};
pub use resolution::{measure_resolution, Resolution};
pub use simulated::{ScriptedClock, SimulatedClock};
pub use system::SystemClock;
