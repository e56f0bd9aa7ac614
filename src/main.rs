// Park Ops Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/park-ops-sim
// ```
//
// Or polling a pinned clock, reproducibly:
//
// ```console
// $ ./target/release/park-ops-sim --ticks 6 --poll-interval-secs 1 --seed 7 --start-time 2024-07-01T12:00:00+08:00
// ```

use anyhow::Context;
use clap::Parser;
use park_ops_sim::dashboard::{DashboardPoller, DashboardSnapshot};
use park_ops_sim::simulation::{LoggingConfig, ParkSimulator, SimulationError};
use park_ops_sim::types::config::CliArgs;
use park_ops_sim::types::SimulationConfig;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing::{error, info, warn};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging = match LoggingConfig::for_cli(args.verbose, args.debug, args.log_dir.as_deref()).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Park Ops Simulator");

    if let Err(e) = run(args) {
        let category = e
            .downcast_ref::<SimulationError>()
            .map_or("Unexpected", SimulationError::category);
        error!(category, "{:#}", e);
        eprintln!("{} error: {:#}", category, e);
        process::exit(1);
    }

    info!("Park Ops Simulator completed successfully");
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let dry_run = args.dry_run;

    let config = SimulationConfig::from_cli_args(args)
        .map_err(SimulationError::from)
        .context("Failed to load configuration")?;
    config
        .validate()
        .map_err(SimulationError::from)
        .context("Configuration validation failed")?;
    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let language = config.language;
    let ticks = config.ticks;
    let interval = config.poll_interval();
    let history_attraction = config.history_attraction.clone();

    let simulator = ParkSimulator::new(config).context("Failed to initialize simulator")?;
    let mut poller = DashboardPoller::new(simulator, history_attraction);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let started = Instant::now();

    poller
        .run(ticks, interval, |snapshot| {
            if let Err(e) = write_snapshot(&mut writer, snapshot) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!(category = e.category(), tick = snapshot.tick, "Skipping snapshot: {}", e);
            }
            eprintln!("{}", snapshot.summary(language));
            Ok(())
        })
        .context("Polling stopped")?;

    eprintln!();
    eprintln!("Run complete:");
    eprintln!("  Ticks: {}", poller.ticks());
    eprintln!("  Peak Visitors: {}", poller.peak_visitors());
    eprintln!("  Elapsed: {:.1}s", started.elapsed().as_secs_f64());
    Ok(())
}

/// Write one snapshot as a JSON line and flush it so consumers see it immediately
fn write_snapshot<W: Write>(writer: &mut W, snapshot: &DashboardSnapshot) -> Result<(), SimulationError> {
    serde_json::to_writer(&mut *writer, snapshot)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Park Ops Simulator");
    eprintln!("==================");
    eprintln!("Synthetic theme park operations telemetry");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Ticks: {}", config.ticks);
    eprintln!("  Poll Interval: {}s", config.poll_interval_secs);
    eprintln!("  Attractions: {}", config.catalog.attractions.len());
    eprintln!("  Zones: {} (capacity {})", config.catalog.zones.len(), config.catalog.total_zone_capacity());
    eprintln!("  History Attraction: {}", config.history_attraction);
    eprintln!("  Language: {}", config.language);
    match config.start_time {
        Some(start) => eprintln!("  Clock: pinned at {}", start.to_rfc3339()),
        None => eprintln!("  Clock: local time"),
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
