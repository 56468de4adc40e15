//! Submission route handler.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::error::CommentError;
use crate::notify;
use crate::query;
use crate::state::AppState;

/// A comment submission body.
///
/// Both fields are required. Neither is checked for emptiness here;
/// that check lives in the widget's client script only.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// Handle `POST /postComment/{slug}`.
///
/// Stores the comment, then delivers the webhook notification. The two
/// steps run in order with no compensation: a storage failure skips
/// the webhook, and a webhook failure fails the request even though
/// the row is already durable.
pub async fn submit_comment(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(submission): Json<NewComment>,
) -> Result<&'static str, CommentError> {
    query::insert_comment(&state.db, &submission.author, &submission.body, &slug).await?;
    tracing::info!(slug = %slug, "comment stored");

    notify::comment_posted(
        &state.http,
        &state.config.webhook_url,
        &slug,
        &submission.author,
        &submission.body,
    )
    .await?;

    Ok("OK")
}
