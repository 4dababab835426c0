use axum::{response::IntoResponse, Json};
use chrono::Utc;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "checked_at": Utc::now().to_rfc3339(),
    }))
}
