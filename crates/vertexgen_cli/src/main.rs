//! Vertexgen CLI - Command Line Operations for Vertex Generation
//!
//! This is the operational entry point for the vertexgen library.
//!
//! # Commands
//!
//! - `vertexgen sample --geometry <file> --config <file>` - Draw
//!   interaction vertices from a detector model
//! - `vertexgen inspect --geometry <file>` - Summarise the cells of a
//!   detector model
//!
//! # Architecture
//!
//! As the outermost layer, this crate wires the geometry and sampler
//! crates together behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Vertexgen interaction vertex generator CLI
#[derive(Parser)]
#[command(name = "vertexgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw interaction vertices from a detector model
    Sample {
        /// Path to the detector geometry file (TOML/JSON)
        #[arg(short, long)]
        geometry: String,

        /// Path to the sampler configuration file (TOML/JSON)
        #[arg(short, long)]
        config: String,

        /// Number of vertices to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Base seed for the run; an explicit seed in the configuration
        /// file takes precedence
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Summarise the cells of a detector model
    Inspect {
        /// Path to the detector geometry file (TOML/JSON)
        #[arg(short, long)]
        geometry: String,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
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

    match cli.command {
        Commands::Sample {
            geometry,
            config,
            count,
            seed,
            format,
        } => commands::sample::run(&geometry, &config, count, seed, &format),
        Commands::Inspect { geometry, format } => commands::inspect::run(&geometry, &format),
    }
}
