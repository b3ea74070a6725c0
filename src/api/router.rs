//! HTTP router.
//!
//! Every route is served both at the root and under `/api/`. Layers
//! (outermost → innermost): CORS → access log → handler.

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the service router over a shared `ApiContext`.
pub fn triage_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::root))
        .merge(routes())
        .nest("/api", routes())
        .fallback(not_found)
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CorsLayer::permissive())
}

fn routes() -> Router<ApiContext> {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/analizar", post(endpoints::analyze::analyze))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
