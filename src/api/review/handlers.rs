use crate::api::models::*;
use crate::storage::NewReview;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

pub async fn create_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<Json<CreateReviewResponse>, AppError> {
    let Json(review) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    info!(filme_id = review.filme_id, autor = %review.autor, nota = review.nota, "Creating review");

    // The nota range is checked by the table constraint, not here.
    let created = state
        .store
        .create(&review)
        .await
        .map_err(|e| AppError::Internal(format!("Erro ao criar review: {}", e)))?;

    Ok(Json(CreateReviewResponse {
        mensagem: "Review criada com sucesso!".to_string(),
        id: created.id,
        created_at: created.created_at,
    }))
}

pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let reviews = state
        .store
        .list()
        .await
        .map_err(|e| AppError::Internal(format!("Erro ao listar reviews: {}", e)))?;

    info!(total = reviews.len(), "Listed reviews");

    Ok(Json(ReviewListResponse {
        total: reviews.len(),
        reviews,
    }))
}
