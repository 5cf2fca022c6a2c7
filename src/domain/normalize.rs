//! Listing normalization: raw field tuples in, typed catalog records out.
//!
//! The pipeline favors partial ingestion over whole-batch failure, so an
//! incomplete listing is a skip (`Ok(None)`) and a malformed price is an
//! error scoped to that one listing, never to the run.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::entities::{NewGoods, RawListing};

/// The cleaned price text did not parse as a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed price text `{text}`")]
pub struct PriceParseError {
    pub text: String,
}

/// Convert one extracted listing into a catalog record.
///
/// Returns `Ok(None)` when any of title, image URL, price text, or
/// description is absent. The category comes from the source feed
/// configuration since the bestseller page is single-category.
pub fn normalize_listing(
    raw: RawListing,
    category: &str,
    ingested_at: DateTime<Utc>,
) -> Result<Option<NewGoods>, PriceParseError> {
    let (Some(title), Some(image_url), Some(price_text), Some(_description)) =
        (raw.title, raw.image_url, raw.price_text, raw.description)
    else {
        return Ok(None);
    };

    let price = parse_price(&price_text)?;

    Ok(Some(NewGoods {
        name: title,
        thumbnail_url: image_url,
        category: category.to_string(),
        price,
        ingested_at,
    }))
}

/// Parse a price in the source page's display form, e.g. `12,345원`.
///
/// The final character is the currency glyph and is dropped; thousands
/// separators are removed; the remainder must be a non-negative integer.
pub fn parse_price(text: &str) -> Result<u32, PriceParseError> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    chars.next_back();
    let cleaned: String = chars.as_str().chars().filter(|c| *c != ',').collect();

    cleaned.parse::<u32>().map_err(|_| PriceParseError {
        text: trimmed.to_string(),
    })
}
