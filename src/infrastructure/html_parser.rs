//! Structural extraction of listing elements from the bestseller page.
//!
//! Field boundaries are determined by markup structure, not text position,
//! so extraction uses CSS selectors over the parsed tree. A listing element
//! missing a sub-element yields `None` for that field; completeness is
//! validated downstream by the normalizer.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::trace;

use crate::domain::entities::RawListing;

/// CSS selectors describing where listing fields live on the source page.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    /// One match per listing element, in document order.
    pub listing: String,
    /// Description text node.
    pub description: String,
    /// Image element carrying both the thumbnail (`src`) and title (`alt`).
    pub image: String,
    /// Display price text node.
    pub price: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            listing: "ol li".to_string(),
            description: "p.copy a".to_string(),
            image: "p.image a img".to_string(),
            price: "p.price strong".to_string(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("invalid listing selector `{selector}`: {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// Extractor with selectors compiled once at construction.
pub struct BestsellerExtractor {
    listing: Selector,
    description: Selector,
    image: Selector,
    price: Selector,
}

impl BestsellerExtractor {
    pub fn new() -> Result<Self, SelectorError> {
        Self::with_selectors(&ListingSelectors::default())
    }

    pub fn with_selectors(selectors: &ListingSelectors) -> Result<Self, SelectorError> {
        Ok(Self {
            listing: compile(&selectors.listing)?,
            description: compile(&selectors.description)?,
            image: compile(&selectors.image)?,
            price: compile(&selectors.price)?,
        })
    }

    /// Walk the document and produce one [`RawListing`] per listing element,
    /// in document order. Never fails on partially populated elements.
    pub fn extract_listings(&self, html: &Html) -> Vec<RawListing> {
        html.select(&self.listing)
            .map(|element| self.extract_one(element))
            .collect()
    }

    fn extract_one(&self, element: ElementRef<'_>) -> RawListing {
        let listing = RawListing {
            title: first_attr(element, &self.image, "alt"),
            image_url: first_attr(element, &self.image, "src"),
            price_text: first_text(element, &self.price),
            description: first_text(element, &self.description),
        };
        trace!(?listing, "extracted listing element");
        listing
    }
}

/// Text content of the first match, with blank text treated as absent.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<String>())
        .and_then(non_blank)
}

/// Attribute of the first match, with blank values treated as absent.
fn first_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|node| node.value().attr(attr))
        .map(str::to_string)
        .and_then(non_blank)
}

fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn compile(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|e| SelectorError {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
