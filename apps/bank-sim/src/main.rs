//! bank-sim — run the bank queueing simulator from the command line.
//!
//! # Example
//!
//! ```bash
//! # Reference layout, 100-tick bound, fixed seed
//! bank-sim --ticks 100 --seed 42
//!
//! # Custom layout, CSV output, no console grid
//! bank-sim --topology topologies/reference.csv --output-dir ./out --quiet
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bank_core::{RunConfig, SimRng};
use bank_facility::{FacilityBuilder, Topology, load_topology_csv};
use bank_output::{ConsoleRenderer, CsvWriter, FacilityOutputObserver};

/// Multi-stage bank simulator.
///
/// Customers arrive at random, are routed by weight among the stations of
/// each stage, queue for a free server, and move on until they leave.
#[derive(Parser, Debug)]
#[command(name = "bank-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Exclusive tick bound; ticks 1..N are simulated
    #[arg(short = 't', long, default_value = "100")]
    ticks: u64,

    /// Random seed for reproducible runs. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Topology CSV (stage,station_id,weight,service_ticks,server_count).
    /// Defaults to the built-in reference layout.
    #[arg(long)]
    topology: Option<PathBuf>,

    /// Emit an occupancy snapshot every N ticks
    #[arg(long, default_value = "1")]
    snapshot_interval: u64,

    /// Write occupancy.csv and customer_events.csv into this directory
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Do not render customer events and occupancy to stdout
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the rendered grid.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,bank_facility=info")),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = RunConfig {
        tick_bound:        args.ticks,
        seed,
        snapshot_interval: args.snapshot_interval,
    };

    let topology = match &args.topology {
        Some(path) => load_topology_csv(path)
            .with_context(|| format!("loading topology from {}", path.display()))?,
        None => Topology::reference(),
    };

    info!(seed, ticks = config.tick_bound, "configuring facility");
    let mut facility = FacilityBuilder::new(config, SimRng::new(seed))
        .topology(topology)
        .build()
        .context("building facility")?;

    let console = (!args.quiet).then(ConsoleRenderer::stdout);
    let csv = match &args.output_dir {
        Some(dir) => Some(FacilityOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("creating output in {}", dir.display()))?,
        )),
        None => None,
    };
    let mut observer = (console, csv);

    let started = Instant::now();
    facility.run(&mut observer);
    let elapsed = started.elapsed();

    let (console, csv) = &mut observer;
    if let Some(e) = console.as_mut().and_then(ConsoleRenderer::take_error) {
        return Err(e).context("writing console output");
    }
    if let Some(e) = csv.as_mut().and_then(FacilityOutputObserver::take_error) {
        return Err(e).context("writing CSV output");
    }

    let counts = facility.counts();
    info!(
        seed,
        admitted = counts.admitted,
        exited = counts.exited,
        dropped = counts.dropped,
        in_system = facility.in_system(),
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );

    Ok(())
}
