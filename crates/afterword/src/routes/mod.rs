//! Route definitions for the comment service.
//!
//! ## Routes
//!
//! - `GET /comments/{slug}` - Widget page with form and stored comments
//! - `POST /postComment/{slug}` - Accept a comment submission
//! - `GET /health` - Health check (JSON)
//! - `GET /main.css` - Widget stylesheet

mod comments;
mod health;
mod post_comment;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::render;
use crate::state::AppState;

/// Build the complete comment service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/comments/{slug}", get(comments::show_comments))
        .route("/postComment/{slug}", post(post_comment::submit_comment))
        .route("/health", get(health::health_check))
        .route("/main.css", get(main_css))
        .with_state(state)
}

/// Serve the widget stylesheet.
async fn main_css() -> impl IntoResponse {
    ([("content-type", "text/css; charset=utf-8")], render::MAIN_CSS)
}
