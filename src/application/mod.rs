//! Application layer: the use cases consumed by the request layer.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod ingestion;

pub use account::{AccountError, AccountUseCase};
pub use cart::CartUseCase;
pub use catalog::CatalogUseCase;
pub use ingestion::{IngestError, IngestionReport, IngestionUseCase};
