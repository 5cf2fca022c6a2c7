//! SQLite connection and pool management.
//!
//! The connection is an explicitly constructed handle with an
//! `connect`/`close` lifecycle scoped to process startup and shutdown;
//! repositories receive a pool clone instead of reaching for shared state.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        if let Some(path) = file_path(database_url) {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("failed to create database directory for {path}"))?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url {database_url}"))?
            .create_if_missing(true);

        // Every connection to `:memory:` opens its own private database, so
        // in-memory urls must not grow the pool past a single connection.
        let max_connections = if is_in_memory(database_url) {
            1
        } else {
            max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {database_url}"))?;

        info!(%database_url, max_connections, "database connected");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schema if it does not exist yet.
    ///
    /// `cart_items` deliberately carries no foreign key to `goods`: a cart
    /// entry may outlive the catalog record it references, and the cart view
    /// resolves such dangling references to an absent item.
    pub async fn migrate(&self) -> Result<()> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS goods (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                thumbnail_url TEXT NOT NULL,
                category TEXT NOT NULL,
                price INTEGER NOT NULL CHECK (price >= 0),
                ingested_at TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS cart_items (
                user_id INTEGER NOT NULL,
                goods_id INTEGER NOT NULL,
                quantity INTEGER NOT NULL CHECK (quantity >= 1),
                PRIMARY KEY (user_id, goods_id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                nickname TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_goods_category ON goods (category)",
            "CREATE INDEX IF NOT EXISTS idx_goods_ingested_at ON goods (ingested_at)",
        ];

        for statement in statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// File system path of a sqlite url, or `None` for in-memory databases.
fn file_path(database_url: &str) -> Option<&str> {
    if is_in_memory(database_url) {
        return None;
    }
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    if path.is_empty() { None } else { Some(path) }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
