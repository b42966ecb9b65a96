//! pocat - Concatenate gettext message catalogs into a single catalog.
//!
//! A CLI tool for merging `.po` files with first-occurrence-wins semantics.

mod cli;

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use pocat::config::Config;
use pocat::error::PoCatError;
use pocat::io::{CatalogReader, CatalogWriter};
use pocat::merge;
use pocat::output::{
    OutputFormatter, display_load_statistics, display_merge_statistics, display_write_statistics,
};
use pocat::validation::Validator;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "POCAT_LOG";

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Install the stderr log subscriber.
///
/// `POCAT_LOG` wins when set. Otherwise verbose mode shows debug events,
/// and warnings are shown unless they were turned off.
fn init_tracing(config: &Config) {
    let default = default_filter(config);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // Fails only when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_filter(config: &Config) -> &'static str {
    match (config.verbose, config.report_warnings) {
        (true, _) => "pocat=debug",
        (false, true) => "warn",
        (false, false) => "error",
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PoCatError> {
    cli.validate()?;

    let inputs = cli.get_all_inputs().await?;
    let config = cli.to_config(inputs)?;

    init_tracing(&config);

    let formatter = OutputFormatter::from_config(&config);
    formatter.debug(&format!("{} v{}", pocat::NAME, pocat::VERSION));

    let validator = Validator::new();
    let summary = validator.validate_config(&config).await?;
    formatter.debug(&format!(
        "Validated {} file(s), {}",
        summary.files_validated,
        summary.format_total_size()
    ));

    let text = merge_files(&config, &formatter).await?;

    let writer = CatalogWriter::for_output(config.output.as_deref());
    let write_stats = writer.write(&text, config.output.as_deref()).await?;

    display_write_statistics(&formatter, &write_stats);

    Ok(())
}

/// Load, merge and serialize the configured inputs.
async fn merge_files(config: &Config, formatter: &OutputFormatter) -> Result<String, PoCatError> {
    let reader = CatalogReader::new();
    let (loaded, load_stats) = reader
        .load_catalogs(config.inputs(), config.effective_jobs())
        .await?;

    if formatter.is_verbose() {
        display_load_statistics(formatter, &load_stats);
    }

    let catalogs = loaded.into_iter().map(|l| l.catalog).collect();
    let output = merge::merge_catalogs(catalogs, &config.merge);

    if formatter.is_verbose() {
        formatter.section("Statistics");
        display_merge_statistics(formatter, &output.statistics);
    }

    Ok(output.text)
}
