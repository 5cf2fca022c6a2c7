//! Repository interfaces for catalog, cart, and account persistence.
//!
//! Concrete implementations live in the infrastructure layer and are passed
//! in explicitly wherever they are used; nothing holds a module-level
//! connection.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{CartEntry, Goods, NewGoods, NewUser, User};

/// Failure in the underlying persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
    /// A persisted record could not be mapped back to its entity.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait GoodsRepository: Send + Sync {
    /// Insert a new catalog record and return its store-assigned id.
    ///
    /// Always inserts: ingestion performs no content dedup, so re-running
    /// against an unchanged page creates duplicate records.
    async fn create(&self, goods: &NewGoods) -> Result<i64, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Goods>, StoreError>;

    /// Batch lookup for the cart view. Ids that do not resolve are simply
    /// absent from the result.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Goods>, StoreError>;

    /// List the catalog, newest first. `None` returns every category.
    async fn find_by_category(&self, category: Option<&str>) -> Result<Vec<Goods>, StoreError>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert the entry, or overwrite its quantity if one already exists for
    /// this (user, goods) pair. The goods id is stored as given; it is not
    /// validated against the catalog.
    async fn upsert(&self, user_id: i64, goods_id: i64, quantity: u32) -> Result<(), StoreError>;

    /// Idempotent: deleting an absent entry is a no-op.
    async fn delete(&self, user_id: i64, goods_id: i64) -> Result<(), StoreError>;

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<CartEntry>, StoreError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<i64, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<User>, StoreError>;
}
