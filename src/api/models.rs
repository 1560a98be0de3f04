use crate::storage::{Review, ReviewStore};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReviewStore>,
}

impl AppState {
    pub fn new(store: ReviewStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Response after creating a review
#[derive(Debug, Serialize)]
pub struct CreateReviewResponse {
    pub mensagem: String,
    pub id: i32,
    pub created_at: NaiveDateTime,
}

/// Response from the review listing endpoint
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub total: usize,
    pub reviews: Vec<Review>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            database: None,
            error: None,
        }
    }

    pub fn connected() -> Self {
        Self {
            database: Some("connected"),
            ..Self::ok()
        }
    }

    pub fn disconnected(error: String) -> Self {
        Self {
            status: "error",
            database: Some("disconnected"),
            error: Some(error),
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Unprocessable(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
