//! Core entities shared between the ingestion pipeline and the cart/catalog
//! query paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item persisted by the ingestion pipeline.
///
/// The id is assigned by the store on insert and is the canonical item
/// identifier everywhere, including cart entries. Records are immutable once
/// created; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goods {
    pub id: i64,
    pub name: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    pub category: String,
    /// Normalized price: non-negative, no separators, no currency glyph.
    pub price: u32,
    #[serde(rename = "ingestedAt")]
    pub ingested_at: DateTime<Utc>,
}

/// A catalog item as produced by the normalizer, before the store assigns
/// an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoods {
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub price: u32,
    pub ingested_at: DateTime<Utc>,
}

/// One listing element as extracted from the source page.
///
/// Every field is optional: the parser tolerates partially populated
/// listing elements and leaves completeness checks to the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub price_text: Option<String>,
    pub description: Option<String>,
}

/// A single cart row. At most one entry exists per (user, goods) pair.
///
/// The referenced goods id is not checked against the catalog: an entry may
/// legitimately point at an item that was removed after being carted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "goodsId")]
    pub goods_id: i64,
    pub quantity: u32,
}

/// One render-ready line of a user's cart view. `goods` is `None` when the
/// referenced catalog record no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub quantity: u32,
    pub goods: Option<Goods>,
}

/// A registered account. Referenced by cart entries through its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Registration payload, already validated by the request layer.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub nickname: String,
    pub password: String,
}
