//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that converts every failure into the
//! JSON response the storefront expects. All route handlers return
//! `Result<T, AppError>`; nothing propagates past this boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dystynkt_core::FulfillmentOrder;
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the webhook.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request verb mismatch on the order route. No side effects.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// A required top-level field is absent from the order payload.
    /// No outbound call has been made.
    #[error("Missing required order data")]
    MissingOrderData,

    /// Printful completed the call but rejected the order. The outbound
    /// attempt did happen, so a partial provider-side state is possible.
    #[error("Failed to create Printful order")]
    ProviderRejected {
        /// Raw Printful error body, relayed for diagnosis.
        details: serde_json::Value,
        /// The exact order that was sent.
        payload: Box<FulfillmentOrder>,
    },

    /// Anything else: missing credential, body parse failure, network
    /// failure, malformed provider response.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::ProviderRejected { .. } | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Diagnostic detail (provider body, outbound payload) is exposed on
        // purpose: this is a trusted integration boundary, not a public API.
        let (status, body) = match self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            Self::MissingOrderData => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing required order data" }),
            ),
            Self::ProviderRejected { details, payload } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Failed to create Printful order",
                    "details": details,
                    "printfulPayload": payload,
                }),
            ),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Internal server error",
                    "details": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
