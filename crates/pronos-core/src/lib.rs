//! Pronos Core Library
//!
//! Shared functionality for the Pronos sales forecasting service:
//! - Request payload validation
//! - Least-squares trend fitting over an ordinal-day axis
//! - 7-day forecast horizon generation
//! - CSV/JSON observation import

pub mod engine;
pub mod error;
pub mod import;
pub mod models;
pub mod regression;

pub use engine::{forecast, forecast_observations, HORIZON_DAYS};
pub use error::{Error, Result};
pub use models::{Forecast, Observation, Prediction};
pub use regression::LinearFit;
