//! Ember CLI - Command-line interface for the Ember effect toolkit

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{curve, info, sample, validate};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Curve authoring toolkit for particle effects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show effect information
    Info {
        /// Path to effect file
        path: String,
    },

    /// Check that every curve in an effect decodes
    Validate {
        /// Path to effect file
        path: String,
    },

    /// Print evaluated curve values across the [0,1] domain
    Sample {
        /// Path to effect file
        path: String,

        /// Emitter name
        #[arg(long)]
        emitter: String,

        /// Property name
        #[arg(long)]
        property: String,

        /// Number of samples
        #[arg(long, default_value = "11")]
        samples: usize,

        /// Seed for spread sampling; omit to print plain curve values
        #[arg(long)]
        spread_seed: Option<u32>,
    },

    /// Curve editing operations
    #[command(subcommand)]
    Curve(curve::CurveCommands),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { path } => info::run(&path),
        Commands::Validate { path } => validate::run(&path),
        Commands::Sample {
            path,
            emitter,
            property,
            samples,
            spread_seed,
        } => sample::run(sample::SampleArgs {
            path,
            emitter,
            property,
            samples,
            spread_seed,
        }),
        Commands::Curve(cmd) => curve::run(cmd),
    }
}
