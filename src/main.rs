//! Uniform Tracker headless runner
//!
//! Opens the configured record store and runs one operation against a
//! restaurant partition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use uniform_tracker::config::AppConfig;
use uniform_tracker::domain::{DomainError, DomainResult, Month, Restaurant};
use uniform_tracker::repository::RecordStore;
use uniform_tracker::service::{export, transfer, SizeDemandMode};
use uniform_tracker::{bootstrap, build_store, init_logging};

#[derive(Parser)]
#[command(name = "uniform-tracker")]
#[command(about = "Employee uniform inventory tracker")]
#[command(version = "0.1.0")]
struct Cli {
    /// Directory holding the database and uniform_tracker.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Restaurant key: port, dickens, bar, hookah, runners
    #[arg(short, long, default_value = "port")]
    restaurant: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print dashboard statistics as JSON
    Dashboard {
        /// Month label, e.g. "Март" (default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Count only sizes of items needing replacement
        #[arg(long)]
        to_order: bool,
    },

    /// Write the monthly XLSX report
    Report {
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Dump the partition as JSON
    Export {
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Replace the partition with a JSON dump
    Import {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.data_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: {}", e);
    }

    match run(cli, config).await {
        Ok(()) => process::exit(0),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> DomainResult<()> {
    let restaurant: Restaurant = cli.restaurant.parse()?;

    match cli.command {
        Commands::Dashboard { month, to_order } => {
            let month = match month {
                Some(label) => label.parse()?,
                None => Month::current(),
            };
            let mode = if to_order { SizeDemandMode::ToOrder } else { SizeDemandMode::AllSizes };

            let manager = bootstrap(&config, restaurant).await?;
            let stats = manager.stats(month, mode).await;
            let json = serde_json::to_string_pretty(&stats).map_err(|e| DomainError::Internal(e.to_string()))?;
            println!("{}", json);
        }
        Commands::Report { out } => {
            let manager = bootstrap(&config, restaurant).await?;
            let sheets = export::build_sheets(&manager.employees().await);
            let path = out.join(export::report_file_name(restaurant, chrono::Local::now().date_naive()));
            export::write_xlsx(&sheets, &path)?;
            println!("{}", path.display());
        }
        Commands::Export { out } => {
            let store = build_store(&config).await?;
            let json = transfer::export_json(store.as_ref(), restaurant).await?;
            let name = transfer::export_file_name(restaurant, chrono::Utc::now().timestamp_millis());
            let path = out.join(name);
            std::fs::write(&path, json)
                .map_err(|e| DomainError::Store(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("{}", path.display());
        }
        Commands::Import { file } => {
            let data = std::fs::read_to_string(&file)
                .map_err(|e| DomainError::Store(format!("Failed to read {}: {}", file.display(), e)))?;
            let store = build_store(&config).await?;
            let count = transfer::import_json(store.as_ref(), restaurant, &data).await?;
            // The process exits right after, so queued remote writes must land now
            store.flush().await?;
            println!("Imported {} employees into {}", count, restaurant.display_name());
        }
    }
    Ok(())
}
