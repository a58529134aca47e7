pub mod memory;
pub mod order_repo;

use async_trait::async_trait;

use crate::models::{EcoSummary, NewOrder, Order};

pub use memory::MemoryOrderStore;
pub use order_repo::PgOrderStore;

/// Upper bound on records returned by `list_all`.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored order {id} is unreadable: {reason}")]
    Corrupt { id: String, reason: String },
}

/// Append-only order persistence: records are written once and never
/// updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Assigns id, timestamp and badge, persists, and returns the stored order.
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError>;

    /// Up to `LIST_LIMIT` orders in insertion order.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;

    async fn aggregate(&self) -> Result<EcoSummary, StoreError>;
}
