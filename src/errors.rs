use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::storage::StoreError;

#[derive(Debug)]
pub enum ApiError {
    Storage(StoreError),
    Render(askama::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Storage(e)
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        ApiError::Render(e)
    }
}

/// Every variant is an internal failure: the mutation was rolled back or the
/// page could not be produced. Details go to the log, not to the browser.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Storage(e) => error!("Storage error: {}", e),
            ApiError::Render(e) => error!("Render error: {}", e),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
              "error": "Internal server error"
            })),
        )
            .into_response()
    }
}
