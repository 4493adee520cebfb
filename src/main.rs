use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use geo_backfill::config::Config;
use geo_backfill::{logging, pipeline};

#[derive(Parser)]
#[command(name = "geo_backfill")]
#[command(about = "Deterministic lat/long backfill for the services dataset")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive lat/long for every row and rewrite the dataset
    Backfill {
        /// Dataset to rewrite (defaults to the configured services CSV)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Report how many rows carry plausible coordinates, without writing
    Check {
        /// Dataset to inspect (defaults to the configured services CSV)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    // Bare invocation backfills the configured dataset
    let command = cli.command.unwrap_or(Commands::Backfill { file: None });

    match command {
        Commands::Backfill { file } => {
            if let Some(file) = file {
                config.dataset = file;
            }
            info!(path = %config.dataset.display(), "starting coordinate backfill");
            let outcome = pipeline::run_backfill(&config)?;
            println!(
                "✅ Updated {} rows with deterministic coordinates ({})",
                outcome.rows_updated,
                outcome.output_file.display()
            );
        }
        Commands::Check { file } => {
            if let Some(file) = file {
                config.dataset = file;
            }
            let outcome = pipeline::run_check(&config)?;
            println!("📊 Coordinate check for {}:", config.dataset.display());
            println!("   Total rows: {}", outcome.total);
            println!("   Plausible: {}", outcome.plausible);
            println!("   Out of bounds: {}", outcome.out_of_bounds);
            println!("   Missing: {}", outcome.missing);
        }
    }
    Ok(())
}
