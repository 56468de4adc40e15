//! Application configuration loaded from environment variables.

use anyhow::Context;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// SQLite database URL for the comment store.
    pub database_url: String,

    /// Chat webhook destination notified on each new comment.
    pub webhook_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `AFTERWORD_WEBHOOK_URL`: chat webhook destination URL
    ///
    /// Optional:
    /// - `AFTERWORD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `AFTERWORD_DATABASE_URL`: SQLite URL (default: "sqlite:comments.db")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("AFTERWORD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let database_url = std::env::var("AFTERWORD_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:comments.db".to_string());

        let webhook_url = std::env::var("AFTERWORD_WEBHOOK_URL")
            .context("AFTERWORD_WEBHOOK_URL must be set to the chat webhook URL")?;

        // The webhook URL embeds a delivery token, so it stays out of the log.
        tracing::info!(
            bind_addr = %bind_addr,
            database_url = %database_url,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            webhook_url,
        })
    }
}
