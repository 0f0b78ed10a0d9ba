//! Application error taxonomy and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::form::ValidationError;
use crate::store::StoreError;

/// Request-handling failures, mapped to HTTP in one place.
///
/// Validation and authorization errors are user-visible but coarse;
/// store faults surface as generic server errors. No retries anywhere.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested article id does not exist.
    #[error("article not found")]
    NotFound,
    /// The submitted form failed schema checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The caller is not the article's author.
    #[error("sorry, you are not allowed to modify this article")]
    Forbidden,
    /// Persistence-layer failure.
    #[error("storage failure")]
    Store(#[source] StoreError),
    /// Markdown rendering failure.
    #[error("failed to render article")]
    Render(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            AppError::Store(err) => tracing::error!(error = %err, "store failure"),
            AppError::Render(err) => tracing::error!(error = %err, "render failure"),
            _ => {}
        }
        (status, self.to_string()).into_response()
    }
}
