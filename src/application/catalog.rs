//! Catalog query boundary consumed by the request layer.

use std::sync::Arc;

use crate::domain::entities::Goods;
use crate::domain::repositories::{GoodsRepository, StoreError};

pub struct CatalogUseCase {
    goods: Arc<dyn GoodsRepository>,
}

impl CatalogUseCase {
    pub fn new(goods: Arc<dyn GoodsRepository>) -> Self {
        Self { goods }
    }

    /// List the catalog, newest first, optionally restricted to a category.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Goods>, StoreError> {
        self.goods.find_by_category(category).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Goods>, StoreError> {
        self.goods.find_by_id(id).await
    }
}
