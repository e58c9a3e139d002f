//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health/` - Health check (public)
//! - everything in [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! Applied outermost first:
//!
//! - **Tracing** - Structured request/response logging
//! - **Session** - Cookie resolution into a [`crate::api::extract::RequestContext`]

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{session, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health/", get(health_handler))
        .merge(api::routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(middleware::from_fn_with_state(state.clone(), session::layer)),
        )
        .with_state(state)
}
