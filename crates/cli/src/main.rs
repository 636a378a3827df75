//! Copperleaf CLI - Database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! cl-cli migrate
//!
//! # Seed demo data from a YAML fixture
//! cl-cli seed --file crates/cli/seeds/demo.yaml
//!
//! # Wipe products before seeding
//! cl-cli seed --file crates/cli/seeds/demo.yaml --reset
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with products and a page-intro document

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cl-cli")]
#[command(author, version, about = "Copperleaf Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database from a YAML fixture
    Seed {
        /// Path to the YAML seed file
        #[arg(short, long, default_value = "crates/cli/seeds/demo.yaml")]
        file: String,

        /// Delete existing products before seeding
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, reset } => commands::seed::run(&file, reset).await?,
    }
    Ok(())
}
