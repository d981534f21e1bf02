//! Record store: the single persistent collection of job applications.
//!
//! Handlers only see `Arc<dyn JobStore>`, so the Postgres backend and the
//! in-memory backend are interchangeable.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::{Job, NewJob};

pub use memory::InMemoryJobStore;
pub use postgres::PgJobStore;

/// `DATABASE_URL` value that selects the in-memory backend.
pub const MEMORY_URL: &str = "memory://";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All records, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Job>, StoreError>;

    /// Persists `job`, assigning its id and creation timestamp.
    async fn create(&self, job: NewJob) -> Result<Job, StoreError>;

    /// Removes the record with `id`. Returns `false` when nothing matched;
    /// a missing record is not an error.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Opens the backend named by `database_url`.
pub async fn connect(database_url: &str) -> Result<Arc<dyn JobStore>, StoreError> {
    if database_url.starts_with(MEMORY_URL) {
        info!("Using in-memory job store; records will not survive a restart");
        return Ok(Arc::new(InMemoryJobStore::default()));
    }

    let pool = crate::db::create_pool(database_url).await?;
    Ok(Arc::new(PgJobStore::new(pool)))
}
