//! Benchmark configuration loaded from disk.

use microtime_common::{BenchConfig, ClockSource, ConfigError, OutputFormat, TrialBudget};
use std::io::Write;

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[trials]
initial = 2000
reduced = 200

[clock]
source = "realtime"

[output]
format = "json"
"#
    )
    .unwrap();

    let config = BenchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.trials, TrialBudget::new(2000, 200));
    assert_eq!(config.clock.source, ClockSource::Realtime);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = BenchConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_written_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    let config = BenchConfig {
        trials: TrialBudget::new(42, 7),
        ..BenchConfig::default()
    };
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();
    assert_eq!(BenchConfig::from_file(&path).unwrap(), config);
}
