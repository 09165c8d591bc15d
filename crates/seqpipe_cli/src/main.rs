//! seqpipe CLI
//!
//! Command-line driver for the lazy vs. materialized pipeline scenarios.
//!
//! # Commands
//!
//! - `run` - Time scenarios over a generated source and report call counts
//! - `list` - List the available scenarios
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use seqpipe_core::{Scenario, ScenarioConfig};
use tracing_subscriber::EnvFilter;

/// seqpipe pipeline comparison tools.
#[derive(Parser)]
#[command(name = "seqpipe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time scenarios over a generated source
    Run {
        /// Scenario to run (repeatable; all scenarios if omitted)
        #[arg(short = 'S', long = "scenario")]
        scenarios: Vec<Scenario>,

        /// Number of records in the source collection
        #[arg(short, long, default_value_t = seqpipe_core::config::DEFAULT_SOURCE_SIZE)]
        size: usize,

        /// Seed for the source generator (entropy if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Timed iterations per scenario
        #[arg(short, long, default_value = "20")]
        iterations: u32,

        /// Results kept by top-N scenarios
        #[arg(short = 'n', long, default_value_t = seqpipe_core::config::DEFAULT_TOP_N)]
        top_n: usize,

        /// Name matched by the first filter stage
        #[arg(long, default_value = seqpipe_core::config::DEFAULT_TARGET_NAME)]
        name: String,

        /// Id threshold of multi-stage scenarios
        #[arg(short, long, default_value_t = seqpipe_core::config::DEFAULT_ID_THRESHOLD)]
        threshold: u32,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List available scenarios
    List,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            scenarios,
            size,
            seed,
            iterations,
            top_n,
            name,
            threshold,
            format,
        } => {
            let mut config = ScenarioConfig::new()
                .source_size(size)
                .top_n(top_n)
                .id_threshold(threshold)
                .target_name(&name)?;
            config.seed = seed;
            commands::run::run(&config, &scenarios, iterations, &format)?;
        }
        Commands::List => commands::list::run(),
        Commands::Version => {
            println!("seqpipe CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("seqpipe Core v{}", seqpipe_core::VERSION);
        }
    }

    Ok(())
}
