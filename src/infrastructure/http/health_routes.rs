//! Health check route

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::application::dto::HealthResponse;
use crate::infrastructure::state::AppState;

/// Liveness probe against the store
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.store_health.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            success: true,
            status: "Database connected".to_string(),
            timestamp: Utc::now(),
        })),
        Err(error) => {
            tracing::error!(error = %error, "Health check failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    success: false,
                    status: "Database connection failed".to_string(),
                    timestamp: Utc::now(),
                }),
            ))
        }
    }
}
