//! Speakable text normalizer command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use norm_core::{CleanerConfig, Locale};
use std::path::PathBuf;
use tracing::{debug, info};

mod commands;
mod logging;

/// Normalize text into a speakable form
#[derive(Debug, Parser)]
#[command(name = "normtext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (overrides the config file)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (overrides the config file)
    #[arg(long, global = true)]
    log_format: Option<logging::LogFormat>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize text with the configured cleaners
    Normalize {
        /// Input text, @file.txt to read a file, or - to read stdin line by line
        input: String,

        /// Comma-delimited cleaner names (e.g. english_cleaners,basic)
        #[arg(long)]
        cleaners: Option<String>,
    },

    /// Expand numbers, currency, and ordinals only
    Numbers {
        /// Input text, @file.txt to read a file, or - to read stdin line by line
        input: String,

        /// Locale whose number rules to apply (en, tr)
        #[arg(short = 'L', long, default_value = "en")]
        locale: Locale,
    },

    /// List the available cleaner pipelines and their stages
    Cleaners,

    /// Show version info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CleanerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CleanerConfig::default(),
    };

    let log =
        logging::LogSettings::resolve(&config.logging, cli.log_level.as_deref(), cli.log_format)
            .context("invalid logging settings")?;
    logging::init_logging(&log);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting normtext");
    debug!(cleaners = %config.cleaner_list(), "loaded configuration");

    match cli.command {
        Commands::Normalize { input, cleaners } => {
            commands::normalize::run(&input, cleaners.as_deref(), &config)
                .context("normalization failed")?;
        }
        Commands::Numbers { input, locale } => {
            commands::numbers::run(&input, locale).context("number expansion failed")?;
        }
        Commands::Cleaners => {
            commands::cleaners::run();
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
