//! motor_twin — electric-motor health twin driver.
//!
//! Generates (or loads) an hourly sensor stream, runs the degradation engine
//! over it, persists the hourly table and the maintenance log, and prints a
//! short summary.
//!
//! ```text
//! motor_twin --hours 10000 --seed 42 --output output/motor_twin
//! motor_twin --config motor_twin.toml --sensors readings.csv
//! motor_twin --runs 32            # batch of 32 seeds derived from --seed
//! RUST_LOG=debug motor_twin       # log every maintenance event
//! ```

mod config;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;

use mt_core::{SimRng, TwinConfig};
use mt_output::{CsvWriter, OutputWriter, TwinOutputObserver};
use mt_sensors::{SensorRecord, SyntheticSensors, load_records_csv};
use mt_sim::{BatchSummary, EngineBuilder, HealthRun, run_batch};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Sqlite,
    Parquet,
}

#[derive(Parser, Debug)]
#[command(name = "motor_twin")]
#[command(about = "Motor health degradation, RUL and maintenance simulator")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hours to simulate (overrides the config file)
    #[arg(short = 'H', long)]
    hours: Option<u64>,

    /// Engine seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Seed of the synthetic sensor stream (overrides the config file)
    #[arg(long)]
    sensor_seed: Option<u64>,

    /// Read sensor records from this CSV instead of synthesizing them
    #[arg(long)]
    sensors: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output/motor_twin")]
    output: PathBuf,

    /// Output backend
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Number of seeds to run as a batch, derived from the engine seed
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
    runs: u64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = config::load(args.config.as_deref())?;
    config::apply_overrides(&mut config, &args);
    config.validate()?;

    println!("=== motor_twin — motor health digital twin ===");
    println!(
        "Hours: {}  |  Seed: {}  |  Sensor seed: {}",
        config.horizon_hours, config.seed, config.sensor_seed
    );
    println!();

    // 1. Sensor stream.
    let records = sensor_records(&config, args.sensors.as_deref())?;
    info!(records = records.len(), "sensor stream ready");

    // 2. Single run, persisted.
    std::fs::create_dir_all(&args.output)?;
    let t0 = Instant::now();
    let (run, rows) = match args.format {
        Format::Csv => run_persisted(&config, &records, CsvWriter::new(&args.output)?)?,
        Format::Sqlite => run_sqlite(&config, &records, &args.output)?,
        Format::Parquet => run_parquet(&config, &records, &args.output)?,
    };
    let elapsed = t0.elapsed();

    // 3. Summary.
    print_summary(&run);
    println!();
    println!(
        "Run complete in {:.3} s  |  {rows} rows written to {}",
        elapsed.as_secs_f64(),
        args.output.display()
    );

    // 4. Optional batch over consecutive seeds.
    if args.runs > 1 {
        let seeds: Vec<u64> = (0..args.runs).map(|i| SimRng::derive_seed(config.seed, i)).collect();
        let t0 = Instant::now();
        let runs = run_batch(&config, &records, &seeds)?;
        if let Some(s) = BatchSummary::from_runs(&runs) {
            print_batch(&s, t0.elapsed().as_secs_f64());
        }
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sensor_records(config: &TwinConfig, path: Option<&Path>) -> Result<Vec<SensorRecord>> {
    match path {
        Some(path) => {
            let records = load_records_csv(path)?;
            if (records.len() as u64) < config.horizon_hours {
                tracing::warn!(
                    records = records.len(),
                    horizon = config.horizon_hours,
                    "sensor file is shorter than the horizon"
                );
            }
            Ok(records)
        }
        None => Ok(SyntheticSensors::new(config.sensor_seed, config.horizon_hours).collect()),
    }
}

fn run_persisted<W: OutputWriter>(
    config:  &TwinConfig,
    records: &[SensorRecord],
    writer:  W,
) -> Result<(HealthRun, u64)> {
    let engine = EngineBuilder::new(config.clone()).build()?;
    let mut obs = TwinOutputObserver::new(writer);
    let run = engine.run(records.iter().copied(), &mut obs);
    if let Some(e) = obs.take_error() {
        bail!("output error: {e}");
    }
    Ok((run, obs.rows_written()))
}

#[cfg(feature = "sqlite")]
fn run_sqlite(config: &TwinConfig, records: &[SensorRecord], dir: &Path) -> Result<(HealthRun, u64)> {
    run_persisted(config, records, mt_output::SqliteWriter::new(dir)?)
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_: &TwinConfig, _: &[SensorRecord], _: &Path) -> Result<(HealthRun, u64)> {
    bail!("SQLite output needs the `sqlite` feature")
}

#[cfg(feature = "parquet")]
fn run_parquet(config: &TwinConfig, records: &[SensorRecord], dir: &Path) -> Result<(HealthRun, u64)> {
    run_persisted(config, records, mt_output::ParquetWriter::new(dir)?)
}

#[cfg(not(feature = "parquet"))]
fn run_parquet(_: &TwinConfig, _: &[SensorRecord], _: &Path) -> Result<(HealthRun, u64)> {
    bail!("Parquet output needs the `parquet` feature")
}

fn print_summary(run: &HealthRun) {
    let hours: Vec<u64> = run.maintenance_events.iter().map(|e| e.tick.0).collect();
    if hours.is_empty() {
        println!("No maintenance events were triggered during the simulation.");
    } else {
        println!("Maintenance events occurred at the following hours:");
        println!("{hours:?}");
    }

    let (normal, warning, critical) = run.status_counts();
    println!();
    println!("Final Motor Health: {:.2}%", run.final_health().unwrap_or(f64::NAN));
    println!("Estimated RUL at final hour: {:.2} hrs", run.final_rul().unwrap_or(f64::NAN));
    println!("Hours by status: Normal {normal}  |  Warning {warning}  |  Critical {critical}");
}

fn print_batch(s: &BatchSummary, secs: f64) {
    println!();
    println!("Batch of {} seeds in {secs:.3} s", s.runs);
    println!("{:<28} {:>10}", "Metric", "Value");
    println!("{}", "-".repeat(39));
    println!("{:<28} {:>10.2}", "Interventions (mean)", s.mean_interventions);
    println!("{:<28} {:>10}", "Interventions (min)", s.min_interventions);
    println!("{:<28} {:>10}", "Interventions (max)", s.max_interventions);
    println!("{:<28} {:>10.2}", "Final health (mean %)", s.mean_final_health);
    match s.mean_first_maintenance {
        Some(h) => println!("{:<28} {:>10.1}", "First maintenance (mean h)", h),
        None => println!("{:<28} {:>10}", "First maintenance (mean h)", "never"),
    }
}
