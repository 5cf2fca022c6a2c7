//! Shared test fixtures.

use bookcart::infrastructure::database_connection::DatabaseConnection;

pub async fn memory_db() -> DatabaseConnection {
    let db = DatabaseConnection::connect("sqlite::memory:", 1)
        .await
        .expect("open in-memory database");
    db.migrate().await.expect("create schema");
    db
}
