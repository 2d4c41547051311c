//! Observation import helpers
//!
//! The CLI accepts historical sales as either a JSON document (the same
//! shape the HTTP endpoint takes) or a headered CSV with `fecha` and
//! `ventas` columns.

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Observation;

/// Parse a headered CSV of observations.
///
/// Column order does not matter; both `fecha` and `ventas` must be
/// present in the header. Dates are YYYY-MM-DD.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let fecha_idx = headers.iter().position(|h| h == "fecha");
    let ventas_idx = headers.iter().position(|h| h == "ventas");

    let (fecha_idx, ventas_idx) = match (fecha_idx, ventas_idx) {
        (Some(f), Some(v)) => (f, v),
        _ => return Err(Error::MissingFields),
    };

    let mut observations = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        let raw_date = record.get(fecha_idx).ok_or(Error::MissingFields)?;
        let fecha = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(raw_date.to_string()))?;

        let raw_value = record.get(ventas_idx).ok_or(Error::MissingFields)?;
        let ventas = raw_value
            .parse::<f64>()
            .map_err(|_| Error::InvalidValue(raw_value.to_string()))?;

        observations.push(Observation::new(fecha, ventas));
    }

    debug!(count = observations.len(), "Parsed CSV observations");
    Ok(observations)
}

/// Read a JSON document for handing to [`crate::engine::forecast`].
///
/// Shape validation (array, fields, types) happens in the engine so that
/// file input and HTTP input fail with the same taxonomy.
pub fn parse_json<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}
