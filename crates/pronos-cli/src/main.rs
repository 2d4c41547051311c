//! Pronos CLI - Sales trend forecasting
//!
//! Usage:
//!   pronos serve --port 5000          Start the forecast API server
//!   pronos forecast --file sales.csv  Forecast the next 7 days from a file

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            allowed_origin,
        } => commands::cmd_serve(&host, port, allowed_origin).await,
        Commands::Forecast { file, output } => commands::cmd_forecast(&file, output),
    }
}
