//! umacard - Profile card document CLI
//!
//! Command-line access to the umacard document model: create, inspect,
//! and edit a profile card JSON document without the web UI.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "umacard")]
#[command(about = "Edit and inspect profile card documents")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a fresh default document
    Init {
        /// Target file
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the active biography and race table
    Show {
        /// Document file
        file: PathBuf,
    },

    /// Print aggregate career statistics
    Stats {
        /// Document file
        file: PathBuf,
    },

    /// Add a race result at the head of the list
    Add(commands::race::AddArgs),

    /// Remove a race result by index (0 = most recent)
    Remove {
        /// Document file
        file: PathBuf,
        /// Index of the entry to remove
        index: usize,
    },

    /// Check every race entry against the validation rules
    Validate {
        /// Document file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("umacard={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Init { file, force } => commands::init::execute(&file, force),
        Commands::Show { file } => commands::show::execute(&file),
        Commands::Stats { file } => commands::stats::execute(&file),
        Commands::Add(args) => commands::race::execute_add(&args),
        Commands::Remove { file, index } => commands::race::execute_remove(&file, index),
        Commands::Validate { file } => commands::validate::execute(&file),
    }
}
