//! Forecast endpoint handlers

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::AppError;
use pronos_core::{engine, Forecast};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// POST /predict - 7-day sales forecast
///
/// Accepts a JSON array of `{fecha, ventas}` observations and returns
/// `{"predicciones": [...]}` with exactly 7 entries. The body is taken as
/// an untyped value so that shape problems flow through the engine's
/// validation taxonomy instead of an extractor rejection.
pub async fn predict(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Forecast>, AppError> {
    let Json(payload) = payload
        .map_err(|rejection| {
            debug!(error = %rejection, "Rejected request body");
            AppError::bad_request("Malformed JSON request body")
        })?;

    let forecast = engine::forecast(&payload)?;

    debug!(
        predictions = forecast.predicciones.len(),
        "Forecast produced"
    );

    Ok(Json(forecast))
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
