//! Spectrum CLI - Command Line Operations for the Odd Prime Spectrum
//!
//! This is the operational entry point for the odd prime spectrum
//! workspace.
//!
//! # Commands
//!
//! - `spectrum sieve` - Build T with the packed odd-only sieve
//! - `spectrum progression` - Build T by marking composite progressions
//! - `spectrum test --index <n>` - Test a single index with the formula
//! - `spectrum primes --limit <L>` - List all primes up to a limit
//! - `spectrum compare` - Cross-validate the three generators
//! - `spectrum demo` - Fixed-parameter walkthrough of all three methods
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wraps the pure
//! generators of `spectrum_core` with argument handling, configuration
//! and rendering; it contains no algorithmic content of its own.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

/// Odd Prime Spectrum CLI
#[derive(Parser)]
#[command(name = "spectrum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "spectrum.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the indicator sequence with the packed odd-only sieve
    Sieve {
        /// Largest index to compute (defaults to the configured bound)
        #[arg(short, long)]
        bound: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Build the indicator sequence by marking composite progressions
    Progression {
        /// Largest index to compute (defaults to the configured bound)
        #[arg(short, long)]
        bound: Option<usize>,

        /// Largest prime used for marking (defaults to 2 * bound + 1)
        #[arg(short, long)]
        prime_cutoff: Option<usize>,
    },

    /// Test a single index with the progression formula
    Test {
        /// Index n to test (o_n = 2n + 1)
        #[arg(short, long)]
        index: usize,

        /// Sieve a shared prime list up to this limit before testing
        #[arg(short, long)]
        prime_limit: Option<usize>,
    },

    /// List all primes up to a limit
    Primes {
        /// Inclusive upper bound for the prime finder
        #[arg(short, long)]
        limit: usize,
    },

    /// Cross-validate the three generators against each other
    Compare {
        /// Largest index to compute (defaults to the configured bound)
        #[arg(short, long)]
        bound: Option<usize>,
    },

    /// Run a fixed-parameter demonstration of all three methods
    Demo,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Sieve { bound, format } => {
            commands::sieve::run(bound.unwrap_or(config.bound), &format, config.sample_rows)
        }
        Commands::Progression {
            bound,
            prime_cutoff,
        } => commands::progression::run(
            bound.unwrap_or(config.bound),
            prime_cutoff,
            config.sample_rows,
        ),
        Commands::Test { index, prime_limit } => commands::test::run(index, prime_limit),
        Commands::Primes { limit } => commands::primes::run(limit),
        Commands::Compare { bound } => commands::compare::run(bound.unwrap_or(config.bound)),
        Commands::Demo => commands::demo::run(),
    }
}
