use crate::api::models::{AppState, HealthResponse};
use axum::{extract::State, Json};
use tracing::warn;

/// Database health. Always answers 200; a failure is reported in the body.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse::connected()),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            Json(HealthResponse::disconnected(e.to_string()))
        }
    }
}

pub async fn static_health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn static_health_is_ok_only() {
        let Json(body) = static_health_handler().await;
        assert_eq!(serde_json::to_value(body).unwrap(), json!({ "status": "ok" }));
    }

    #[test]
    fn disconnected_carries_error() {
        let body = HealthResponse::disconnected("connection refused".to_string());
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "status": "error",
                "database": "disconnected",
                "error": "connection refused"
            })
        );
    }

    #[test]
    fn connected_omits_error() {
        let body = HealthResponse::connected();
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "status": "ok", "database": "connected" })
        );
    }
}
