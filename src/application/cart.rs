//! Cart operations and the joined cart view.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{CartLine, Goods};
use crate::domain::repositories::{CartRepository, GoodsRepository, StoreError};

pub struct CartUseCase {
    carts: Arc<dyn CartRepository>,
    goods: Arc<dyn GoodsRepository>,
}

impl CartUseCase {
    pub fn new(carts: Arc<dyn CartRepository>, goods: Arc<dyn GoodsRepository>) -> Self {
        Self { carts, goods }
    }

    /// Build the render-ready view of a user's cart.
    ///
    /// The distinct referenced ids are resolved against the catalog in one
    /// batch lookup rather than one query per entry. An id that no longer
    /// resolves produces a line with `goods: None`; a dangling reference is
    /// never an error.
    pub async fn view(&self, user_id: i64) -> Result<Vec<CartLine>, StoreError> {
        let entries = self.carts.list_by_user(user_id).await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<i64> = entries.iter().map(|entry| entry.goods_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let resolved: HashMap<i64, Goods> = self
            .goods
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|goods| (goods.id, goods))
            .collect();

        debug!(
            user_id,
            entries = entries.len(),
            resolved = resolved.len(),
            "cart view built"
        );

        Ok(entries
            .into_iter()
            .map(|entry| CartLine {
                quantity: entry.quantity,
                goods: resolved.get(&entry.goods_id).cloned(),
            })
            .collect())
    }

    /// Put an item in the cart, overwriting the quantity if it is already
    /// there. The goods id is not validated against the catalog.
    pub async fn set_item(
        &self,
        user_id: i64,
        goods_id: i64,
        quantity: u32,
    ) -> Result<(), StoreError> {
        self.carts.upsert(user_id, goods_id, quantity).await
    }

    /// Remove an item from the cart; removing an absent item is a no-op.
    pub async fn remove_item(&self, user_id: i64, goods_id: i64) -> Result<(), StoreError> {
        self.carts.delete(user_id, goods_id).await
    }
}
