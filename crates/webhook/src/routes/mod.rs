//! HTTP route handlers for the webhook.
//!
//! # Route Structure
//!
//! ```text
//! GET     /api/health          - Liveness payload
//! OPTIONS /api/health          - Pre-flight (empty 200)
//!
//! POST    /api/printful-order  - Forward a completed checkout to Printful
//! OPTIONS /api/printful-order  - Pre-flight (empty 200)
//! <other> /api/printful-order  - 405 without reading the body
//! ```

pub mod health;
pub mod orders;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::cors;
use crate::state::AppState;

/// Create all routes for the webhook.
pub fn routes() -> Router<AppState> {
    let health = Router::new()
        .route(
            "/api/health",
            get(health::health).options(health::preflight),
        )
        .route_layer(middleware::from_fn(cors::health_cors));

    let orders = Router::new()
        .route(
            "/api/printful-order",
            post(orders::create)
                .options(orders::preflight)
                .fallback(orders::method_not_allowed),
        )
        .route_layer(middleware::from_fn(cors::order_cors));

    health.merge(orders)
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
