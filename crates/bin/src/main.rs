//! Margin CLI binary.
//!
//! Loads every company spreadsheet in the input directory, compares the
//! companies and writes charts, exports and a summary to the output directory.

use clap::Parser;
use margin::{ConfigOverrides, PipelineConfig, run_pipeline};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "margin")]
#[command(about = "Margin: compare companies by profit margin and volatility", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding one spreadsheet per company
    #[arg(long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory for charts, exports and the summary
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = ConfigOverrides {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
    };
    let config = PipelineConfig::load(cli.config.as_deref(), &overrides)?;
    debug!(?config, "Resolved settings");

    let outcome = run_pipeline(&config)?;
    info!(
        files = outcome.artifacts.all().len(),
        output_dir = %config.output_dir.display(),
        "Report written"
    );

    println!("Analysis completed successfully.");
    Ok(())
}
