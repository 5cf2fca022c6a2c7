//! Application configuration.
//!
//! A single JSON file covers the source feed, HTTP client, database, and
//! logging. Every section has defaults so a missing or partial file still
//! yields a runnable configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::infrastructure::http_client::HttpClientConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub http: HttpClientConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// The bestseller feed this deployment ingests from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    /// WHATWG encoding label of the page payload.
    pub encoding: String,
    /// Category assigned to every ingested record; the feed is
    /// single-category.
    pub category: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: "http://www.yes24.com/24/Category/BestSeller".to_string(),
            encoding: "euc-kr".to_string(),
            category: "books".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:data/bookcart.db".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set.
    pub level: String,
    /// When set, logs are additionally written to daily-rolled files in this
    /// directory.
    pub directory: Option<PathBuf>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "bookcart.log".to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub async fn load_or_default(path: &Path) -> Result<Self> {
        if tokio::fs::try_exists(path).await? {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bestseller_feed() {
        let config = AppConfig::default();

        assert_eq!(config.source.url, "http://www.yes24.com/24/Category/BestSeller");
        assert_eq!(config.source.encoding, "euc-kr");
        assert_eq!(config.source.category, "books");
        assert_eq!(config.database.url, "sqlite:data/bookcart.db");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "database": { "url": "sqlite::memory:" } }"#).unwrap();

        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.source.encoding, "euc-kr");
    }

    #[test]
    fn empty_object_is_a_complete_config() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.http.timeout_seconds, 30);
    }
}
