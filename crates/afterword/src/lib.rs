//! Afterword - an embeddable comment widget server.
//!
//! This crate provides a small HTTP server that renders a comment widget
//! for any content slug, stores submissions in SQLite, and relays each
//! new comment to a chat webhook.
//!
//! # Architecture
//!
//! - **Query**: Parameterized reads and writes against a single `Comments` table
//! - **Render**: Generates the widget page with maud (compile-time templates)
//! - **Notify**: Forwards each stored comment to the configured webhook
//!
//! # URL Pattern
//!
//! ```text
//! GET  /comments/{slug}      widget page for a content item
//! POST /postComment/{slug}   store a submission and notify the webhook
//! ```
//!
//! # Security
//!
//! - All dynamic content is HTML-escaped by maud
//! - Storage access goes through parameterized queries only
//! - No authentication, moderation, or rate limiting; slugs are not
//!   validated against any registry of known content

pub mod config;
pub mod error;
pub mod notify;
pub mod query;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
