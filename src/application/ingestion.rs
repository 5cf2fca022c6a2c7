//! The ingestion run: fetch → decode → parse → normalize → store.
//!
//! A run is a linear pipeline with no intermediate persisted state. Fetch
//! and decode failures abort with zero writes; a normalization failure is
//! isolated to its one listing and folded into the skip count; a store
//! failure propagates as-is, without rolling back earlier inserts.

use std::sync::Arc;

use chrono::Utc;
use scraper::Html;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::normalize::normalize_listing;
use crate::domain::repositories::{GoodsRepository, StoreError};
use crate::infrastructure::config::SourceConfig;
use crate::infrastructure::decoding::{DecodeError, decode_page};
use crate::infrastructure::html_parser::BestsellerExtractor;
use crate::infrastructure::http_client::{FetchError, PageFetcher};

/// Outcome of one ingestion run, reported to the triggering endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestionReport {
    /// Listings persisted as new catalog records.
    pub created: u32,
    /// Listings dropped as incomplete or carrying a malformed price.
    pub skipped: u32,
}

/// Run-level ingestion failure. Item-level problems never surface here;
/// they are folded into [`IngestionReport::skipped`].
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid source url: {0}")]
    InvalidSourceUrl(#[from] url::ParseError),
    #[error(transparent)]
    Transport(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct IngestionUseCase {
    fetcher: Arc<dyn PageFetcher>,
    goods: Arc<dyn GoodsRepository>,
    extractor: BestsellerExtractor,
    source: SourceConfig,
}

impl IngestionUseCase {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        goods: Arc<dyn GoodsRepository>,
        extractor: BestsellerExtractor,
        source: SourceConfig,
    ) -> Self {
        Self {
            fetcher,
            goods,
            extractor,
            source,
        }
    }

    /// Run the pipeline against the configured source feed.
    pub async fn run(&self) -> Result<IngestionReport, IngestError> {
        self.run_from(&self.source.url).await
    }

    /// Run the pipeline against an explicit source url.
    pub async fn run_from(&self, source_url: &str) -> Result<IngestionReport, IngestError> {
        let url = Url::parse(source_url)?;
        info!(%url, "starting ingestion run");

        let page = self.fetcher.fetch(&url).await?;
        if let Some(content_type) = &page.content_type {
            debug!(%content_type, "declared content type");
        }

        let text = decode_page(&page.body, &self.source.encoding)?;

        // `Html` is not Send; parsing stays in this scope so the document is
        // gone before the first store await.
        let listings = {
            let html = Html::parse_document(&text);
            self.extractor.extract_listings(&html)
        };
        debug!(count = listings.len(), "extracted listing elements");

        let mut report = IngestionReport::default();
        for raw in listings {
            match normalize_listing(raw, &self.source.category, Utc::now()) {
                Ok(Some(goods)) => {
                    self.goods.create(&goods).await?;
                    report.created += 1;
                }
                Ok(None) => {
                    debug!("skipping incomplete listing");
                    report.skipped += 1;
                }
                Err(err) => {
                    warn!(%err, "skipping listing with malformed price");
                    report.skipped += 1;
                }
            }
        }

        info!(
            created = report.created,
            skipped = report.skipped,
            "ingestion run finished"
        );
        Ok(report)
    }
}
