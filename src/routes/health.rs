use axum::{Json, extract::State};
use chrono::Utc;

use crate::AppState;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let posts = state.session.lock().await.board.len();

    Json(serde_json::json!({
      "status": "healthy",
      "timestamp": Utc::now().timestamp(),
      "posts": posts
    }))
}
