//! SQLite-backed catalog store.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::domain::entities::{Goods, NewGoods};
use crate::domain::repositories::{GoodsRepository, StoreError};

const GOODS_COLUMNS: &str = "id, name, thumbnail_url, category, price, ingested_at";

#[derive(Clone)]
pub struct SqliteGoodsRepository {
    pool: SqlitePool,
}

impl SqliteGoodsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_goods(row: &SqliteRow) -> Result<Goods, StoreError> {
        let ingested_at: String = row.try_get("ingested_at")?;
        let ingested_at = DateTime::parse_from_rfc3339(&ingested_at)
            .map_err(|e| StoreError::Corrupt(format!("bad ingested_at timestamp: {e}")))?
            .with_timezone(&Utc);

        Ok(Goods {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            thumbnail_url: row.try_get("thumbnail_url")?,
            category: row.try_get("category")?,
            price: row.try_get("price")?,
            ingested_at,
        })
    }
}

#[async_trait]
impl GoodsRepository for SqliteGoodsRepository {
    async fn create(&self, goods: &NewGoods) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO goods (name, thumbnail_url, category, price, ingested_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&goods.name)
        .bind(&goods.thumbnail_url)
        .bind(&goods.category)
        .bind(goods.price)
        .bind(
            goods
                .ingested_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, name = %goods.name, "goods created");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Goods>, StoreError> {
        let sql = format!("SELECT {GOODS_COLUMNS} FROM goods WHERE id = ?");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;

        row.as_ref().map(Self::row_to_goods).transpose()
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Goods>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("SELECT {GOODS_COLUMNS} FROM goods WHERE id IN ({placeholders})");

        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(Self::row_to_goods).collect()
    }

    async fn find_by_category(&self, category: Option<&str>) -> Result<Vec<Goods>, StoreError> {
        let rows = match category {
            Some(category) => {
                let sql = format!(
                    "SELECT {GOODS_COLUMNS} FROM goods WHERE category = ? \
                     ORDER BY ingested_at DESC, id DESC"
                );
                sqlx::query(&sql)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql =
                    format!("SELECT {GOODS_COLUMNS} FROM goods ORDER BY ingested_at DESC, id DESC");
                sqlx::query(&sql).fetch_all(&self.pool).await?
            }
        };

        rows.iter().map(Self::row_to_goods).collect()
    }
}
