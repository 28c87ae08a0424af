//! sigrate - convolution, FIR design and rate conversion from the command line

use anyhow::Result;
use clap::Parser;
use sigrate_tools::{render, Command, OutputFormat, ToolConfig};
use std::path::PathBuf;
use tracing::{debug, info};

/// sigrate signal processing tool
#[derive(Parser)]
#[command(name = "sigrate")]
#[command(about = "Discrete-time convolution, filter design and rational resampling")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places for text output
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ToolConfig::from_file(path)?,
        None => ToolConfig::default(),
    };
    if cli.json {
        config.output = OutputFormat::Json;
    }
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }

    // Initialize logging
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        config.level()?
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("sigrate starting");
    debug!("{:?}", config);

    let report = cli.command.execute()?;
    print!("{}", render(&report, config.output, config.precision)?);

    Ok(())
}
