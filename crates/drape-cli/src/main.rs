//! drape CLI: simulation, benchmarking and snapshot inspection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "drape")]
#[command(version, about = "drape: mass-spring cloth dropped onto a sphere")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until the cloth comes to rest.
    Simulate(commands::SimulateArgs),

    /// Run benchmark scenarios.
    Benchmark {
        /// Which scenario to run (reference_drape, small_drape, offset_drape, free_fall, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override each scenario's tick cap.
        #[arg(long)]
        max_ticks: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: PathBuf,
    },

    /// Validate a config (.toml) or snapshot (.bin).
    Validate {
        /// Path to config or snapshot file.
        path: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Simulate(args) => commands::simulate(&args),
        Commands::Benchmark {
            scenario,
            max_ticks,
            output,
        } => commands::benchmark(&scenario, max_ticks, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
