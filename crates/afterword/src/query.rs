//! SQLite storage layer for the comment store.
//!
//! One table, two parameterized statements. Reads apply no ordering clause;
//! rows come back in whatever order the store produces them.

use sqlx::SqlitePool;

use crate::error::CommentError;

/// A row from the `Comments` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,
    /// Display name supplied with the submission.
    pub author: String,
    /// Comment content.
    pub body: String,
    /// Slug of the content item the comment belongs to.
    pub post_slug: String,
}

/// Create the `Comments` table if it does not exist yet.
///
/// Runs once at startup. Ids are assigned by SQLite, never by the
/// application.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), CommentError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS Comments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            author TEXT NOT NULL,
            body TEXT NOT NULL,
            post_slug TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Fetch every comment for a slug, in storage order.
pub async fn comments_for_slug(
    pool: &SqlitePool,
    slug: &str,
) -> Result<Vec<Comment>, CommentError> {
    let comments = sqlx::query_as::<_, Comment>("SELECT * FROM Comments WHERE post_slug = ?")
        .bind(slug)
        .fetch_all(pool)
        .await?;

    Ok(comments)
}

/// Insert a new comment row. The assigned id is not read back.
pub async fn insert_comment(
    pool: &SqlitePool,
    author: &str,
    body: &str,
    slug: &str,
) -> Result<(), CommentError> {
    sqlx::query("INSERT INTO Comments (author, body, post_slug) VALUES (?, ?, ?)")
        .bind(author)
        .bind(body)
        .bind(slug)
        .execute(pool)
        .await?;

    Ok(())
}
