//! Clock benchmark entry point.
//!
//! Prints one reading from each microtime accessor, then measures the
//! smallest observable step between two back-to-back clock reads.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use microtime_common::config::{BenchConfig, ClockSource, OutputFormat};
use microtime_probe::report::write_resolution_text;
use microtime_probe::{measure_resolution, BenchReport, ClockProvider, Readings, SystemClock};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Clock benchmark command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "microtime-bench",
    about = "Print microsecond clock readings and measure clock resolution",
    version,
    long_about = None
)]
struct Args {
    /// Path to a benchmark configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trial budget before any positive difference is seen.
    #[arg(long, value_name = "N")]
    initial_trials: Option<u64>,

    /// Trial budget once a positive difference is seen.
    #[arg(long, value_name = "N")]
    reduced_trials: Option<u64>,

    /// Clock source (overrides config file).
    #[arg(long, value_enum)]
    clock: Option<ClockArg>,

    /// Emit a JSON document instead of text.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,
}

/// Command-line spelling of [`ClockSource`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClockArg {
    Gettimeofday,
    Realtime,
}

impl From<ClockArg> for ClockSource {
    fn from(arg: ClockArg) -> Self {
        match arg {
            ClockArg::Gettimeofday => ClockSource::Gettimeofday,
            ClockArg::Realtime => ClockSource::Realtime,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting microtime benchmark");

    let config = resolve_config(&args, std::env::var("MICROTIME_CONFIG_PATH").ok())?;

    let clock = SystemClock::new(config.clock.source);
    info!(
        initial = config.trials.initial,
        reduced = config.trials.reduced,
        source = %clock.source(),
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&clock, &config, &mut out)
}

/// Initialize logging with the specified log level.
///
/// Logs go to stderr so stdout carries only the report.
fn init_logging(level: &str) {
    let filter = format!(
        "microtime_bench={},microtime_probe={},microtime_common={}",
        level, level, level
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Load the configuration, apply command-line overrides, and validate.
///
/// `env_path` is the value of `MICROTIME_CONFIG_PATH`, if set.
fn resolve_config(args: &Args, env_path: Option<String>) -> Result<BenchConfig> {
    let mut config = load_config(args.config.as_deref(), env_path)?;
    apply_overrides(args, &mut config);
    config.validate().context("Invalid benchmark configuration")?;
    Ok(config)
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `MICROTIME_CONFIG_PATH` environment variable
/// 3. Built-in defaults
fn load_config(cli_path: Option<&Path>, env_path: Option<String>) -> Result<BenchConfig> {
    if let Some(config_path) = cli_path {
        info!(?config_path, "Loading config from command-line argument");
        return BenchConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path));
    }

    if let Some(env_path) = env_path {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from MICROTIME_CONFIG_PATH");
            return BenchConfig::from_file(&config_path).with_context(|| {
                format!("Failed to load config from MICROTIME_CONFIG_PATH={:?}", env_path)
            });
        }
        warn!(
            path = %env_path,
            "MICROTIME_CONFIG_PATH set but file does not exist, using defaults"
        );
    }

    info!("No config file given, using built-in defaults");
    Ok(BenchConfig::default())
}

/// Command-line flags win over values from the config file.
fn apply_overrides(args: &Args, config: &mut BenchConfig) {
    if let Some(initial) = args.initial_trials {
        config.trials.initial = initial;
    }
    if let Some(reduced) = args.reduced_trials {
        config.trials.reduced = reduced;
    }
    if let Some(clock) = args.clock {
        config.clock.source = clock.into();
    }
    if args.json {
        config.output.format = OutputFormat::Json;
    }
}

/// Take the readings, run the measurement, and write the report.
///
/// An inconclusive measurement is reported, not returned as an error.
fn run<C, W>(clock: &C, config: &BenchConfig, out: &mut W) -> Result<()>
where
    C: ClockProvider + ?Sized,
    W: Write,
{
    let readings = Readings::capture(clock).context("Failed to read clock")?;

    if config.output.format == OutputFormat::Text {
        // Readings go out before the measurement starts.
        readings.write_text(out)?;
        writeln!(out)?;
        out.flush()?;
    }

    let resolution =
        measure_resolution(clock, &config.trials).context("Clock failed during measurement")?;

    match config.output.format {
        OutputFormat::Text => {
            write_resolution_text(out, &resolution)?;
        }
        OutputFormat::Json => {
            let report = BenchReport::new(clock.name(), readings, &resolution);
            let json = report.to_json().context("Failed to serialize report")?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}
