//! Liveness API Handler

use axum::{Json, response::IntoResponse};

/// GET /api/ping
/// Liveness check, no remote calls
pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "message": "droidforge build relay is up",
    }))
}
