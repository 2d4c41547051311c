//! Pronos Web Server
//!
//! Axum-based REST API around the Pronos forecast engine. The server is a
//! thin transport shell: it decodes the JSON body, dispatches to
//! `pronos_core::engine::forecast`, and encodes the result or error back
//! to JSON. The engine is stateless, so requests need no coordination.
//!
//! - CORS open by default (dashboard clients run on other origins);
//!   restrictable with an origin allow-list
//! - Request body size limit
//! - Sanitized error responses: validation errors come back as
//!   `{"error": ...}` with a 400 status

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod handlers;

/// Maximum request body size (1 MB)
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let router = Router::new()
        // Compatibility path used by existing dashboard clients
        .route("/predict", post(handlers::predict))
        .route("/api/predict", post(handlers::predict))
        .route("/health", get(handlers::health));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Open by default: the forecast endpoint serves browser dashboards
        // hosted on other origins and carries no credentials
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<pronos_core::Error> for AppError {
    fn from(err: pronos_core::Error) -> Self {
        if err.is_validation() {
            // Every engine validation error is caller-visible and maps to 400
            Self::bad_request(&err.to_string())
        } else {
            tracing::error!(error = %err, "Internal error");
            Self::internal("An internal error occurred")
        }
    }
}
