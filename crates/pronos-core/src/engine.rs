//! Forecast engine
//!
//! Validates a JSON payload of `(fecha, ventas)` observations, fits a
//! least-squares trend line over an ordinal-day axis, and projects the
//! 7 calendar days after the latest observed date.
//!
//! The pipeline is a pure function of its input: validate → sort →
//! featurize → fit → extrapolate → round. No state survives the call, so
//! concurrent invocations need no coordination.

use chrono::{Datelike, Duration, NaiveDate};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Forecast, Observation, Prediction};
use crate::regression::LinearFit;

/// Number of days in the forecast horizon
pub const HORIZON_DAYS: usize = 7;

/// Required date field on every request element
const FIELD_DATE: &str = "fecha";

/// Required value field on every request element
const FIELD_VALUE: &str = "ventas";

/// Produce a 7-day forecast from an untyped JSON payload.
///
/// The payload must be an array of at least 2 objects, each carrying a
/// `fecha` date string (YYYY-MM-DD) and a numeric `ventas` field.
/// Validation failures short-circuit before any fitting; no partial
/// results are ever returned.
pub fn forecast(payload: &Value) -> Result<Forecast> {
    let items = payload.as_array().ok_or(Error::InvalidInput)?;

    if items.len() < 2 {
        return Err(Error::InsufficientData);
    }

    // Field presence is checked across the whole payload before any
    // parsing, so a missing column is reported as such even when an
    // earlier element also has a malformed date.
    for item in items {
        let has_both = item
            .as_object()
            .map(|obj| obj.contains_key(FIELD_DATE) && obj.contains_key(FIELD_VALUE))
            .unwrap_or(false);
        if !has_both {
            return Err(Error::MissingFields);
        }
    }

    let mut observations = Vec::with_capacity(items.len());
    for item in items {
        let fecha = parse_date(&item[FIELD_DATE])?;
        let ventas = parse_value(&item[FIELD_VALUE])?;
        observations.push(Observation::new(fecha, ventas));
    }

    forecast_observations(&observations)
}

/// Produce a 7-day forecast from already-parsed observations.
///
/// Used by the CLI's CSV path; shares the sort/fit/extrapolate stages
/// with [`forecast`].
pub fn forecast_observations(observations: &[Observation]) -> Result<Forecast> {
    if observations.len() < 2 {
        return Err(Error::InsufficientData);
    }

    // Stable sort: equal dates keep their input order
    let mut sorted = observations.to_vec();
    sorted.sort_by_key(|obs| obs.fecha);

    let points: Vec<(f64, f64)> = sorted
        .iter()
        .map(|obs| (day_ordinal(obs.fecha), obs.ventas))
        .collect();

    let fit = LinearFit::fit(&points);

    let last_date = sorted.last().map(|obs| obs.fecha).unwrap_or_default();
    debug!(
        n = sorted.len(),
        slope = fit.slope,
        intercept = fit.intercept,
        last_date = %last_date,
        "Fitted sales trend"
    );

    let predicciones = (1..=HORIZON_DAYS as i64)
        .map(|offset| {
            let fecha = last_date + Duration::days(offset);
            let ventas = round2(fit.predict(day_ordinal(fecha)));
            Prediction { fecha, ventas }
        })
        .collect();

    Ok(Forecast { predicciones })
}

/// Map a calendar date onto the numeric regression axis.
///
/// Days since the Common Era epoch: consecutive calendar days differ by
/// exactly 1 and the mapping is strictly monotonic in date.
fn day_ordinal(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Round to 2 decimal places (half away from zero)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_date(value: &Value) -> Result<NaiveDate> {
    let raw = value
        .as_str()
        .ok_or_else(|| Error::InvalidDate(value.to_string()))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}

fn parse_value(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::InvalidValue(n.to_string())),
        // Numeric strings are coerced, matching the lenient float
        // conversion the dashboard clients have always relied on
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidValue(s.clone())),
        other => Err(Error::InvalidValue(other.to_string())),
    }
}
