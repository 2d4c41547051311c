//! Offline forecast command implementation

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pronos_core::{engine, import, Forecast};

use crate::cli::OutputFormat;

pub fn cmd_forecast(file: &Path, output: OutputFormat) -> Result<()> {
    let forecast = run_forecast(file)?;

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&forecast)?);
        }
        OutputFormat::Table => print_table(&forecast),
    }

    Ok(())
}

/// Load observations from a file (format by extension) and forecast.
///
/// `.csv` files go through the typed CSV importer; anything else is read
/// as a JSON document and validated by the engine.
pub fn run_forecast(file: &Path) -> Result<Forecast> {
    let reader = File::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    let is_csv = file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let forecast = if is_csv {
        let observations = import::parse_csv(reader)?;
        debug!(count = observations.len(), file = %file.display(), "Loaded CSV observations");
        engine::forecast_observations(&observations)?
    } else {
        let payload = import::parse_json(reader)?;
        engine::forecast(&payload)?
    };

    Ok(forecast)
}

fn print_table(forecast: &Forecast) {
    println!("{:<12} {:>12}", "fecha", "ventas");
    println!("{:-<12} {:->12}", "", "");
    for pred in &forecast.predicciones {
        println!("{:<12} {:>12.2}", pred.fecha, pred.ventas);
    }
}
