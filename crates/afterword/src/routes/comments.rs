//! Widget page route handler.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::CommentError;
use crate::query;
use crate::render;
use crate::state::AppState;

/// Handle `GET /comments/{slug}`.
///
/// Fetches every comment for the slug in storage order and returns the
/// rendered widget page. A storage failure fails the whole request.
pub async fn show_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, CommentError> {
    let comments = query::comments_for_slug(&state.db, &slug).await?;
    tracing::debug!(slug = %slug, count = comments.len(), "rendering widget page");

    Ok(Html(render::comments_page(&slug, &comments).into_string()))
}
