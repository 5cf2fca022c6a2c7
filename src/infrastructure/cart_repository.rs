//! SQLite-backed cart store.
//!
//! The (user_id, goods_id) primary key enforces the at-most-one-entry
//! invariant; quantity overwrites happen atomically in the upsert itself.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::domain::entities::CartEntry;
use crate::domain::repositories::{CartRepository, StoreError};

#[derive(Clone)]
pub struct SqliteCartRepository {
    pool: SqlitePool,
}

impl SqliteCartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &SqliteRow) -> Result<CartEntry, StoreError> {
        Ok(CartEntry {
            user_id: row.try_get("user_id")?,
            goods_id: row.try_get("goods_id")?,
            quantity: row.try_get("quantity")?,
        })
    }
}

#[async_trait]
impl CartRepository for SqliteCartRepository {
    async fn upsert(&self, user_id: i64, goods_id: i64, quantity: u32) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO cart_items (user_id, goods_id, quantity)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, goods_id) DO UPDATE SET quantity = excluded.quantity
            "#,
        )
        .bind(user_id)
        .bind(goods_id)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        debug!(user_id, goods_id, quantity, "cart entry upserted");
        Ok(())
    }

    async fn delete(&self, user_id: i64, goods_id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND goods_id = ?")
            .bind(user_id)
            .bind(goods_id)
            .execute(&self.pool)
            .await?;

        debug!(
            user_id,
            goods_id,
            deleted = result.rows_affected(),
            "cart entry delete"
        );
        Ok(())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<CartEntry>, StoreError> {
        let rows = sqlx::query(
            "SELECT user_id, goods_id, quantity FROM cart_items WHERE user_id = ? ORDER BY rowid",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_entry).collect()
    }
}
