//! bookcart - bestseller catalog ingestion and shopping cart backend.
//!
//! The core is the ingestion-and-consistency pipeline: fetch the remote
//! bestseller page, decode its legacy encoding, extract listing elements
//! structurally, normalize them into catalog records, and persist them.
//! Independently, per-user cart entries are joined against the catalog into
//! a view that tolerates dangling item references.
//!
//! The request layer (routing, auth tokens, form validation) is an external
//! collaborator; it drives the use cases in [`application`].

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    AccountError, AccountUseCase, CartUseCase, CatalogUseCase, IngestError, IngestionReport,
    IngestionUseCase,
};
pub use domain::{CartEntry, CartLine, Goods, NewGoods, NewUser, RawListing, StoreError, User};
pub use infrastructure::{
    AppConfig, BestsellerExtractor, DatabaseConnection, DecodeError, FetchError, HttpClient,
    HttpClientConfig, ListingSelectors, PageFetcher, SqliteCartRepository, SqliteGoodsRepository,
    SqliteUserRepository,
};
