use crate::api::catalog::{Movie, MOVIES};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StaticRootResponse {
    pub mensagem: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub filmes: &'static str,
    pub reviews: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub mensagem: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub filmes: [Movie; 3],
}

pub async fn static_root_handler() -> Json<StaticRootResponse> {
    Json(StaticRootResponse {
        mensagem: "API funcionando no Docker!",
    })
}

pub async fn review_api_root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        mensagem: "API de Filmes com PostgreSQL - Exercício 2",
        endpoints: Endpoints {
            health: "/health",
            filmes: "/filmes",
            reviews: "/reviews (GET e POST)",
        },
    })
}

pub async fn movies_handler() -> Json<MoviesResponse> {
    Json(MoviesResponse { filmes: MOVIES })
}
