pub mod catalog;
pub mod health;
pub mod models;
pub mod review;

// Re-exports
pub use models::*;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Review API: catalog, database health and reviews.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .merge(catalog::review_api_routes())
        .merge(review::routes())
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Static API: catalog and a constant health flag.
pub fn static_router() -> Router {
    Router::new()
        .route("/health", get(health::static_health_handler))
        .merge(catalog::static_api_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
