use std::path::PathBuf;
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::Context;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use mars_clock::config::{ClockSettings, SolNumbering, load_settings};
use mars_clock::export::{json, series::write_rows, writer_for_path};
use mars_clock::rovers::RoverCatalog;
use mars_clock::series;
use mars_clock::status::Snapshot;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Mars Sol Date, Coordinated Mars Time and rover local times"
)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rover catalog: YAML file, TOML file, or directory of TOML files (defaults to built-in)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Number sols from 1 at landing instead of 0
    #[arg(long, global = true, default_value_t = false)]
    mission_sols: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Mars clock and every rover once
    Show {
        /// Instant to convert, RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
    /// Refresh the clock at the configured interval
    Watch {
        /// Stop after this many refreshes
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// List the rover catalog
    Rovers,
    /// Tabulate Mars time over an Earth date range as CSV
    Table {
        /// First instant, RFC 3339
        #[arg(long)]
        from: DateTime<Utc>,
        /// Last instant, RFC 3339
        #[arg(long)]
        to: DateTime<Utc>,
        /// Sampling step in Earth hours
        #[arg(long, default_value_t = 24.0)]
        step_hours: f64,
        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// Write a JSON snapshot of the clock and rovers
    Snapshot {
        /// Instant to convert, RFC 3339 (defaults to now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ClockSettings::default(),
    };
    let catalog = match cli.catalog.as_ref().or(settings.catalog.as_ref()) {
        Some(path) => RoverCatalog::load(path)
            .with_context(|| format!("loading rover catalog from {}", path.display()))?,
        None => RoverCatalog::builtin().context("parsing built-in rover catalog")?,
    };
    let numbering = if cli.mission_sols {
        SolNumbering::Mission
    } else {
        settings.sol_numbering
    };

    match cli.command {
        Command::Show { at } => {
            let snapshot = Snapshot::at(at.unwrap_or_else(Utc::now), &catalog, numbering);
            print_snapshot(&snapshot);
        }
        Command::Watch { ticks } => {
            let interval = StdDuration::from_millis(settings.refresh_interval_ms);
            let mut tick = 0u64;
            loop {
                print_snapshot(&Snapshot::now(&catalog, numbering));
                tick += 1;
                if ticks.is_some_and(|limit| tick >= limit) {
                    break;
                }
                println!();
                thread::sleep(interval);
            }
        }
        Command::Rovers => {
            println!(
                "{:<14} {:<9} {:<21} {:>8} {:>8}",
                "Name", "State", "Landing (UTC)", "Lat", "Lon"
            );
            for rover in &catalog {
                println!(
                    "{:<14} {:<9} {:<21} {:>7.1}° {:>7.1}°",
                    rover.name,
                    rover.state.to_string(),
                    utc_label(rover.landing),
                    rover.latitude_deg,
                    rover.longitude_deg
                );
            }
        }
        Command::Table {
            from,
            to,
            step_hours,
            output,
        } => {
            let step = step_from_hours(step_hours)?;
            let samples = series::sample(from, to, step)?;
            let labels: Vec<String> = samples.iter().map(|s| utc_label(s.utc)).collect();
            let writer = writer_for_path(&output)
                .with_context(|| format!("opening {}", output.display()))?;
            write_rows(
                writer,
                samples
                    .iter()
                    .zip(&labels)
                    .map(|(sample, label)| sample.to_row(label)),
            )?;
            tracing::info!(rows = samples.len(), output = %output.display(), "table written");
        }
        Command::Snapshot { at, output } => {
            let snapshot = Snapshot::at(at.unwrap_or_else(Utc::now), &catalog, numbering);
            let writer = writer_for_path(&output)
                .with_context(|| format!("opening {}", output.display()))?;
            json::write_pretty(writer, &snapshot)?;
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &Snapshot) {
    let mars = &snapshot.mars;
    println!("=== Mars Clock ===");
    println!("Earth (UTC) : {}", utc_label(snapshot.earth_utc));
    println!("MTC         : {}", mars.mtc);
    println!("Sol (MSD)   : {:.4}", mars.msd);
    println!("Ls          : {:.2}° ({})", mars.ls, mars.season());
    println!("Mars Year   : {}", mars.my);
    for rover in &snapshot.rovers {
        println!(
            "{:<14} {:<9} Sol {:>5}  LMST {}  ({:.1}°N, {:.1}°E)",
            rover.name,
            rover.state.to_string(),
            rover.sol,
            rover.lmst,
            rover.latitude_deg,
            rover.longitude_deg
        );
    }
}

fn step_from_hours(hours: f64) -> anyhow::Result<Duration> {
    if !hours.is_finite() {
        anyhow::bail!("step must be a finite number of hours (got {hours})");
    }
    Duration::try_milliseconds((hours * 3_600_000.0).round() as i64)
        .ok_or_else(|| anyhow::anyhow!("step of {hours} hours is out of range"))
}

fn utc_label(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
