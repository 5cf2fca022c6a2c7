//! End-to-end ingestion runs over a stubbed bestseller page.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use encoding_rs::EUC_KR;
use reqwest::StatusCode;
use url::Url;

use bookcart::application::{IngestError, IngestionReport, IngestionUseCase};
use bookcart::domain::repositories::GoodsRepository;
use bookcart::infrastructure::config::SourceConfig;
use bookcart::infrastructure::database_connection::DatabaseConnection;
use bookcart::infrastructure::goods_repository::SqliteGoodsRepository;
use bookcart::infrastructure::html_parser::BestsellerExtractor;
use bookcart::infrastructure::http_client::{FetchError, FetchedPage, PageFetcher};

/// Three listing elements: two complete, one without a thumbnail.
const FEED: &str = r#"
    <html><body>
    <ol>
      <li>
        <p class="image"><a href="/goods/1"><img src="http://img.test/1.jpg" alt="첫 번째 책"/></a></p>
        <p class="copy"><a href="/goods/1">올해의 베스트셀러</a></p>
        <p class="price"><strong>10,000원</strong></p>
      </li>
      <li>
        <p class="image"><a href="/goods/2"><img src="http://img.test/2.jpg" alt="두 번째 책"/></a></p>
        <p class="copy"><a href="/goods/2">꾸준히 팔리는 스테디셀러</a></p>
        <p class="price"><strong>7,500원</strong></p>
      </li>
      <li>
        <p class="image"><a href="/goods/3"><img alt="표지 없는 책"/></a></p>
        <p class="copy"><a href="/goods/3">이미지가 아직 없다</a></p>
        <p class="price"><strong>3,000원</strong></p>
      </li>
    </ol>
    </body></html>
"#;

enum StubResponse {
    Body(Vec<u8>),
    Status(StatusCode),
}

struct StubFetcher {
    response: StubResponse,
}

impl StubFetcher {
    fn page(html: &str) -> Self {
        let (bytes, _, _) = EUC_KR.encode(html);
        Self {
            response: StubResponse::Body(bytes.into_owned()),
        }
    }

    fn raw(bytes: Vec<u8>) -> Self {
        Self {
            response: StubResponse::Body(bytes),
        }
    }

    fn failing(status: StatusCode) -> Self {
        Self {
            response: StubResponse::Status(status),
        }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        match &self.response {
            StubResponse::Body(body) => Ok(FetchedPage {
                body: body.clone(),
                content_type: Some("text/html; charset=euc-kr".to_string()),
            }),
            StubResponse::Status(status) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
        }
    }
}

fn source() -> SourceConfig {
    SourceConfig {
        url: "http://bestsellers.test/feed".to_string(),
        ..SourceConfig::default()
    }
}

fn pipeline(
    db: &DatabaseConnection,
    fetcher: StubFetcher,
) -> (IngestionUseCase, Arc<SqliteGoodsRepository>) {
    let goods = Arc::new(SqliteGoodsRepository::new(db.pool().clone()));
    let use_case = IngestionUseCase::new(
        Arc::new(fetcher),
        goods.clone(),
        BestsellerExtractor::new().unwrap(),
        source(),
    );
    (use_case, goods)
}

#[tokio::test]
async fn complete_listings_are_created_and_incomplete_ones_skipped() {
    let db = common::memory_db().await;
    let (ingestion, goods) = pipeline(&db, StubFetcher::page(FEED));

    let report = ingestion.run().await.unwrap();
    assert_eq!(
        report,
        IngestionReport {
            created: 2,
            skipped: 1
        }
    );

    let catalog = goods.find_by_category(None).await.unwrap();
    assert_eq!(catalog.len(), 2);

    let mut prices: Vec<u32> = catalog.iter().map(|g| g.price).collect();
    prices.sort_unstable();
    assert_eq!(prices, vec![7_500, 10_000]);

    for item in &catalog {
        assert_eq!(item.category, "books");
    }
}

#[tokio::test]
async fn rerunning_against_an_unchanged_page_duplicates_the_catalog() {
    let db = common::memory_db().await;
    let (ingestion, goods) = pipeline(&db, StubFetcher::page(FEED));

    ingestion.run().await.unwrap();
    let second = ingestion.run().await.unwrap();

    assert_eq!(second.created, 2);
    assert_eq!(goods.find_by_category(None).await.unwrap().len(), 4);
}

#[tokio::test]
async fn malformed_price_drops_only_that_listing() {
    let page = r##"
        <ol>
          <li>
            <p class="image"><a href="#"><img src="http://img.test/a.jpg" alt="정상 도서"/></a></p>
            <p class="copy"><a href="#">설명</a></p>
            <p class="price"><strong>5,000원</strong></p>
          </li>
          <li>
            <p class="image"><a href="#"><img src="http://img.test/b.jpg" alt="가격이 이상한 도서"/></a></p>
            <p class="copy"><a href="#">설명</a></p>
            <p class="price"><strong>품절</strong></p>
          </li>
        </ol>
    "##;

    let db = common::memory_db().await;
    let (ingestion, goods) = pipeline(&db, StubFetcher::page(page));

    let report = ingestion.run().await.unwrap();
    assert_eq!(
        report,
        IngestionReport {
            created: 1,
            skipped: 1
        }
    );

    let catalog = goods.find_by_category(None).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].price, 5_000);
}

#[tokio::test]
async fn undecodable_payload_aborts_with_zero_writes() {
    let db = common::memory_db().await;
    let (ingestion, goods) = pipeline(&db, StubFetcher::raw(vec![b'<', 0xFF, 0xFF, b'>']));

    let err = ingestion.run().await.unwrap_err();
    assert!(matches!(err, IngestError::Decode(_)));

    assert!(goods.find_by_category(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn transport_failure_aborts_with_zero_writes() {
    let db = common::memory_db().await;
    let (ingestion, goods) = pipeline(&db, StubFetcher::failing(StatusCode::NOT_FOUND));

    let err = ingestion.run().await.unwrap_err();
    assert!(matches!(
        err,
        IngestError::Transport(FetchError::Status { .. })
    ));

    assert!(goods.find_by_category(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_source_url_is_rejected_before_fetching() {
    let db = common::memory_db().await;
    let (ingestion, _) = pipeline(&db, StubFetcher::page(FEED));

    let err = ingestion.run_from("not a url").await.unwrap_err();
    assert!(matches!(err, IngestError::InvalidSourceUrl(_)));
}

#[tokio::test]
async fn page_without_listing_elements_reports_empty_run() {
    let db = common::memory_db().await;
    let (ingestion, _) = pipeline(&db, StubFetcher::page("<html><body><p>공사중</p></body></html>"));

    let report = ingestion.run().await.unwrap();
    assert_eq!(report, IngestionReport::default());
}
