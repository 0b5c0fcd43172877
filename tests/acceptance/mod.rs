//! Integration tests for microtime acceptance testing.
//!
//! Deterministic scenarios use simulated clocks; `system_clock_test`
//! reads the real wall clock and only asserts properties that hold on
//! any reasonably configured host.

mod common;
mod config_test;
mod scenario_test;
mod system_clock_test;
