use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors a handler can surface to the client.
///
/// `NotFound` maps to a bare 404; store failures are logged and reported as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "internal error" })))
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
