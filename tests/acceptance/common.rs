//! Common utilities for integration tests.

#![allow(dead_code)] // Not every helper is used by every test module

use microtime_common::TrialBudget;
use microtime_probe::report::write_text_report;
use microtime_probe::{measure_resolution, ClockProvider, Readings, Resolution};

/// Output of a full benchmark run against a test clock.
#[derive(Debug)]
pub struct BenchRun {
    /// Rendered text output.
    pub text: String,
    /// Measurement details.
    pub resolution: Resolution,
}

/// Run readings plus measurement and render them as text.
pub fn run_bench(clock: &dyn ClockProvider, budget: TrialBudget) -> BenchRun {
    let readings = Readings::capture(clock).expect("readings failed");
    let resolution = measure_resolution(clock, &budget).expect("measurement failed");
    let mut buf = Vec::new();
    write_text_report(&mut buf, &readings, &resolution).expect("write failed");
    BenchRun {
        text: String::from_utf8(buf).expect("report is not UTF-8"),
        resolution,
    }
}

/// Last non-empty line of the rendered text.
pub fn last_line(text: &str) -> &str {
    text.lines().rev().find(|l| !l.is_empty()).unwrap_or("")
}
