//! Application state shared across all request handlers.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::query;

/// Maximum number of pooled connections to the comment store.
const MAX_DB_CONNECTIONS: u32 = 5;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the comment store.
    pub db: SqlitePool,

    /// HTTP client for webhook notifications. No application-level timeout
    /// is configured; the client's defaults apply.
    pub http: reqwest::Client,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Opens the comment store (creating the database file and the
    /// `Comments` table if missing) and builds the webhook HTTP client.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let db = SqlitePoolOptions::new()
            .max_connections(MAX_DB_CONNECTIONS)
            .connect_with(options)
            .await?;

        query::ensure_schema(&db).await?;

        tracing::info!(
            database_url = %config.database_url,
            max_connections = MAX_DB_CONNECTIONS,
            "application state initialized"
        );

        Ok(Self {
            db,
            http: reqwest::Client::new(),
            config: Arc::new(config),
        })
    }
}
