//! Infrastructure layer: HTTP fetching, text decoding, HTML extraction,
//! sqlite persistence, configuration, and logging.

pub mod cart_repository;
pub mod config;
pub mod database_connection;
pub mod decoding;
pub mod goods_repository;
pub mod html_parser;
pub mod http_client;
pub mod logging;
pub mod user_repository;

pub use cart_repository::SqliteCartRepository;
pub use config::{AppConfig, DatabaseConfig, LoggingConfig, SourceConfig};
pub use database_connection::DatabaseConnection;
pub use decoding::{DecodeError, decode_page};
pub use goods_repository::SqliteGoodsRepository;
pub use html_parser::{BestsellerExtractor, ListingSelectors, SelectorError};
pub use http_client::{FetchError, FetchedPage, HttpClient, HttpClientConfig, PageFetcher};
pub use logging::init_logging;
pub use user_repository::SqliteUserRepository;
