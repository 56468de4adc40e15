//! Error types for the comment widget service.
//!
//! Every failure surfaces as a plain 500; the underlying cause goes to the
//! log, never to the embedding page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Comment service error type.
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    /// Comment store query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Webhook delivery error.
    #[error("webhook error: {0}")]
    Webhook(#[from] reqwest::Error),
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(err) => tracing::error!(error = %err, "database error"),
            Self::Webhook(err) => tracing::error!(error = %err, "webhook delivery failed"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
