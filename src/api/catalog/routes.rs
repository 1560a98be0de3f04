use crate::api::catalog::handlers::{
    movies_handler, review_api_root_handler, static_root_handler,
};
use axum::{routing::get, Router};

/// `/` and `/filmes` for the static variant.
pub fn static_api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(static_root_handler))
        .route("/filmes", get(movies_handler))
}

/// `/` and `/filmes` for the database-backed variant.
pub fn review_api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(review_api_root_handler))
        .route("/filmes", get(movies_handler))
}
