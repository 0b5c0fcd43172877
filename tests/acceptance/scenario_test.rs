//! Deterministic benchmark scenarios.
//!
//! # Acceptance Criteria
//!
//! - A clock advancing 1µs per read measures exactly 1 microsecond
//! - A frozen clock prints the inconclusive message
//! - A zero budget prints the inconclusive message
//! - Fixed readings are printed verbatim

use super::common::{last_line, run_bench};
use microtime_common::{Micros, TimeVal, TrialBudget};
use microtime_probe::report::INCONCLUSIVE_MESSAGE;
use microtime_probe::{
    measure_resolution, ClockProvider, Readings, ScriptedClock, SimulatedClock,
};

#[test]
fn test_increasing_sequence_reports_one_microsecond() {
    let clock = SimulatedClock::stepping(1000, 1);
    let run = run_bench(&clock, TrialBudget::default());
    assert_eq!(
        last_line(&run.text),
        "Minimum difference measured: 1 microseconds"
    );
}

#[test]
fn test_constant_clock_reports_error() {
    let clock = SimulatedClock::fixed(5000);
    let run = run_bench(&clock, TrialBudget::default());
    assert_eq!(last_line(&run.text), INCONCLUSIVE_MESSAGE);
    assert_eq!(run.resolution.trials, 100_000);
    // Every pair reads equal, so every trial takes the baseline fallback.
    assert_eq!(run.resolution.fallbacks, run.resolution.trials);
}

#[test]
fn test_zero_budget_reports_error() {
    let clock = SimulatedClock::stepping(0, 1);
    let run = run_bench(&clock, TrialBudget::new(0, 0));
    assert_eq!(last_line(&run.text), INCONCLUSIVE_MESSAGE);
}

#[test]
fn test_fixed_readings_printed_verbatim() {
    let clock = SimulatedClock::fixed(1_700_000_000_000_000);
    let readings = Readings::capture(&clock).unwrap();
    assert_eq!(readings.now, Micros(1_700_000_000_000_000));
    assert_eq!(readings.now_struct, TimeVal::new(1_700_000_000, 0).unwrap());

    let run = run_bench(&clock, TrialBudget::new(10, 1));
    let lines: Vec<&str> = run.text.lines().collect();
    assert_eq!(lines[0], "microtime.now() = 1700000000000000");
    assert_eq!(lines[1], "microtime.nowDouble() = 1700000000.000000");
    assert_eq!(lines[2], "microtime.nowStruct() = { sec: 1700000000, usec: 0 }");
    assert_eq!(lines[3], "");
}

#[test]
fn test_frozen_clock_after_single_advance() {
    // The clock advances once, right after the baseline, then freezes.
    // The only positive difference is that first advance, seen through
    // the baseline fallback.
    let clock = ScriptedClock::new(vec![5000, 5004]);
    let res = measure_resolution(&clock, &TrialBudget::new(1000, 100)).unwrap();
    assert_eq!(res.min_diff, Some(4));
    assert_eq!(res.improvements, 1);
    assert_eq!(res.trials, 100);
    assert_eq!(res.fallbacks, 100);
}

#[test]
fn test_reported_minimum_is_positive_and_minimal() {
    // Pair gaps of 5, 3, 0, 7, 3, 1, 4 microseconds.
    let gaps = [5u64, 3, 0, 7, 3, 1, 4];
    let mut script = vec![0u64];
    let mut t = 1_000u64;
    for gap in gaps {
        script.push(t);
        script.push(t + gap);
        t += 100;
    }
    let clock = ScriptedClock::new(script);
    let budget = TrialBudget::new(gaps.len() as u64, gaps.len() as u64);
    let min = measure_resolution(&clock, &budget)
        .unwrap()
        .into_result()
        .unwrap();

    assert!(min > 0);
    assert!(gaps.iter().filter(|g| **g > 0).all(|g| min <= *g));
    assert_eq!(min, 1);
}

#[test]
fn test_boxed_clock_provider() {
    let clock: Box<dyn ClockProvider> = Box::new(SimulatedClock::stepping(10, 5));
    let run = run_bench(&clock, TrialBudget::new(4, 2));
    assert_eq!(
        last_line(&run.text),
        "Minimum difference measured: 5 microseconds"
    );
}
