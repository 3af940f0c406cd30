use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use shared::utils::process_memory_bytes;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub db_status: String,
    pub mem_usage: String,
}

#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachability and process memory", body = HealthResponse)
    )
)]
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => "Connection OK",
        Err(e) => {
            warn!("🩺 Database ping failed: {e}");
            "Connection Error"
        }
    };

    let mem_usage = process_memory_bytes()
        .map(|bytes| format!("{}MiB", bytes / 1024 / 1024))
        .unwrap_or_else(|| "unknown".to_string());

    (
        StatusCode::OK,
        Json(HealthResponse {
            db_status: db_status.to_string(),
            mem_usage,
        }),
    )
}
