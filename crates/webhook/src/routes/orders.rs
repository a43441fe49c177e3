//! Order webhook handler: validate, translate, forward.
//!
//! A strict linear pipeline - parse the body, check the three required
//! top-level fields, translate to a Printful order, submit it, relay the
//! outcome. Each validation failure short-circuits with its own response
//! and skips the outbound call entirely.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dystynkt_core::translate;
use serde_json::json;
use tracing::instrument;

use crate::error::AppError;
use crate::services::printful::PrintfulError;
use crate::state::AppState;

/// Handle a checkout-completed webhook.
///
/// The body is parsed by hand so malformed JSON lands in the catch-all 500
/// path instead of an axum rejection with a different shape.
#[instrument(skip(state, body))]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let request: dystynkt_core::OrderRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::Internal(e.to_string()))?;

    let (Some(order), Some(items), Some(address)) = (
        request.snipcart_order,
        request.items,
        request.shipping_address,
    ) else {
        return Err(AppError::MissingOrderData);
    };

    tracing::info!(invoice = ?order.invoice_number, "Processing order");

    let printful_order = translate::build_fulfillment_order(&order, &items, &address);

    match state.printful().create_order(&printful_order).await {
        Ok(created) => {
            tracing::info!(printful_order_id = created.id, "Printful order created");
            Ok((
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "printfulOrderId": created.id,
                    "message": "Order sent to Printful successfully",
                    "snipcartOrder": order.invoice_number,
                })),
            )
                .into_response())
        }
        Err(PrintfulError::Api { status, body }) => {
            tracing::error!(status, "Printful rejected the order");
            Err(AppError::ProviderRejected {
                details: body,
                payload: Box::new(printful_order),
            })
        }
        Err(err) => Err(AppError::Internal(err.to_string())),
    }
}

/// Pre-flight response. The CORS middleware attaches the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Reject non-POST verbs without reading the body.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
