//! pokefetch CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pokefetch::{
    error::Result,
    models::Config,
    pipeline,
    services::{FetchMode, HttpFetcher},
    storage::CsvFileSink,
};

/// pokefetch - PokeAPI catalog exporter
#[derive(Parser, Debug)]
#[command(
    name = "pokefetch",
    version,
    about = "Exports a filtered Pokemon dataset as CSV"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "pokefetch.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full export: walk the catalog, fetch details, write the CSV
    Export {
        /// Override the configured output path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Override the configured listing start URL
        #[arg(long)]
        start_url: Option<String>,

        /// Fetch details one at a time instead of concurrently
        #[arg(long)]
        sequential: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("pokefetch starting...");

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Export {
            output,
            start_url,
            sequential,
        } => {
            if let Some(url) = start_url {
                config.api.start_url = url;
            }
            if let Some(path) = output {
                config.output.path = path.display().to_string();
            }
            config.validate()?;

            let mode = if sequential {
                FetchMode::Sequential
            } else {
                FetchMode::Concurrent {
                    max_in_flight: config.fetcher.max_concurrent,
                }
            };

            let fetcher = HttpFetcher::new(&config.fetcher)?;
            let sink = CsvFileSink::new(&config.output.path);

            let summary = pipeline::run_export(&config, &fetcher, &sink, mode).await?;
            summary.log();
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK (start_url={}, max_concurrent={}, output={})",
                config.api.start_url,
                config.fetcher.max_concurrent,
                config.output.path
            );
        }
    }

    log::info!("Done!");

    Ok(())
}
