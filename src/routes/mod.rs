mod health;
mod post;

use axum::{
    Router,
    routing::{self, get},
};
use tower_http::trace::TraceLayer;

use crate::states::AppState;

/// Builds the router. Handlers serialize on the session mutex in `AppState`,
/// so events never interleave.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(post::index))
        .route("/health", get(health::health_check))
        .route("/posts", routing::post(post::create_post))
        .route("/posts/{id}/comments", routing::post(post::add_comment))
        .route("/posts/{id}/toggle", routing::post(post::toggle_comments))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
