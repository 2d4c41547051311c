//! Domain models for Pronos
//!
//! Field names (`fecha`, `ventas`, `predicciones`) are part of the wire
//! contract with existing dashboard clients and must not be renamed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observed sales data point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation (YYYY-MM-DD on the wire)
    pub fecha: NaiveDate,
    /// Observed sales quantity
    pub ventas: f64,
}

impl Observation {
    pub fn new(fecha: NaiveDate, ventas: f64) -> Self {
        Self { fecha, ventas }
    }
}

/// A forecasted sales value for a future date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Calendar date of the prediction (YYYY-MM-DD on the wire)
    pub fecha: NaiveDate,
    /// Predicted sales quantity, rounded to 2 decimal places
    pub ventas: f64,
}

/// Forecast response: exactly 7 predictions for the 7 consecutive days
/// after the latest observed date, in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub predicciones: Vec<Prediction>,
}
