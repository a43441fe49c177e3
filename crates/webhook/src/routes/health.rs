//! Liveness endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde_json::{Value, json};

use crate::state::AppState;

/// Service name reported by the health endpoint.
const SERVICE_NAME: &str = "Dystynkt.com Printful Integration";

/// Liveness health check.
///
/// Reports the service as healthy if it is running at all. Does not probe
/// Printful reachability.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.config().environment,
    }))
}

/// Pre-flight response. The CORS middleware attaches the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
