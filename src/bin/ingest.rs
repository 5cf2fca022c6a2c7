//! One-shot ingestion run against the configured bestseller feed.
//!
//! Usage: `ingest [config.json]`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use bookcart::application::IngestionUseCase;
use bookcart::infrastructure::config::AppConfig;
use bookcart::infrastructure::database_connection::DatabaseConnection;
use bookcart::infrastructure::goods_repository::SqliteGoodsRepository;
use bookcart::infrastructure::html_parser::BestsellerExtractor;
use bookcart::infrastructure::http_client::{HttpClient, PageFetcher};
use bookcart::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path).await?,
        None => AppConfig::default(),
    };

    let _log_guard = init_logging(&config.logging)?;

    let db = DatabaseConnection::connect(&config.database.url, config.database.max_connections)
        .await?;
    db.migrate().await?;

    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpClient::with_config(&config.http)?);
    let goods = Arc::new(SqliteGoodsRepository::new(db.pool().clone()));
    let extractor = BestsellerExtractor::new()?;

    let ingestion = IngestionUseCase::new(fetcher, goods, extractor, config.source.clone());
    let report = ingestion.run().await?;

    println!(
        "ingestion finished: {} created, {} skipped",
        report.created, report.skipped
    );

    db.close().await;
    Ok(())
}
