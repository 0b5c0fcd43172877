//! Operating system clock sanity tests.
//!
//! These read the real wall clock. Assertions are limited to ranges and
//! loose agreement so they hold on loaded CI hosts.

use microtime_common::{ClockSource, TrialBudget};
use microtime_probe::{measure_resolution, ClockProvider, Readings, SystemClock};

// 2020-01-01T00:00:00Z in seconds.
const AFTER_2020: u64 = 1_577_836_800;

#[test]
fn test_sources_agree_within_a_second() {
    let gtod = SystemClock::new(ClockSource::Gettimeofday);
    let realtime = SystemClock::new(ClockSource::Realtime);

    let a = gtod.now().unwrap().as_secs_f64();
    let b = realtime.now().unwrap().as_secs_f64();
    assert!((a - b).abs() < 1.0, "gettimeofday={a} realtime={b}");
}

#[test]
fn test_readings_are_plausible() {
    let readings = Readings::capture(&SystemClock::default()).unwrap();
    assert!(readings.now_struct.sec() > AFTER_2020);
    assert!(readings.now_struct.usec() < 1_000_000);
    assert!(readings.now_double > AFTER_2020 as f64);
}

#[test]
fn test_system_clock_resolution_is_small() {
    for source in [ClockSource::Gettimeofday, ClockSource::Realtime] {
        let clock = SystemClock::new(source);
        let res = measure_resolution(&clock, &TrialBudget::default()).unwrap();
        let min = res
            .min_diff
            .unwrap_or_else(|| panic!("{} never advanced", clock.name()));
        assert!(min > 0);
        // Any working wall clock ticks at least every 100ms.
        assert!(min < 100_000, "{} resolution {min}us", clock.name());
    }
}
