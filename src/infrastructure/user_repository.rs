//! SQLite-backed account store.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{StoreError, UserRepository};

const USER_COLUMNS: &str = "id, email, nickname, password, created_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &SqliteRow) -> Result<User, StoreError> {
        let created_at: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| StoreError::Corrupt(format!("bad created_at timestamp: {e}")))?
            .with_timezone(&Utc);

        Ok(User {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            nickname: row.try_get("nickname")?,
            password: row.try_get("password")?,
            created_at,
        })
    }

    async fn find_by_column(&self, column: &str, value: &str) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = ?");
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO users (email, nickname, password, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.nickname)
        .bind(&user.password)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.find_by_column("email", email).await
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError> {
        self.find_by_column("nickname", nickname).await
    }
}
