//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Pronos - 7-day sales trend forecasting
#[derive(Parser)]
#[command(name = "pronos")]
#[command(about = "Sales trend forecasting service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the forecast API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Restrict CORS to these origins (repeatable; default allows any)
        #[arg(long = "allowed-origin")]
        allowed_origin: Vec<String>,
    },

    /// Forecast the next 7 days from a file of observations
    Forecast {
        /// Input file: .csv with fecha,ventas columns, or a JSON array
        /// of {"fecha": "...", "ventas": ...} objects
        #[arg(short, long)]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

/// Forecast command output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// The API wire shape: {"predicciones": [...]}
    Json,
}
