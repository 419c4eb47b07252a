use async_trait::async_trait;
use thiserror::Error;

use pizzeria_core::domain::order::Order;
use pizzeria_core::domain::product::Product;
use pizzeria_core::errors::{ApplicationError, DomainError};

pub mod memory;

pub use memory::{InMemoryOrderRepository, InMemoryProductCatalog};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Domain(error) => Self::Domain(error),
            RepositoryError::Unavailable(message) => Self::Persistence(message),
        }
    }
}

/// Orders keyed by their generated id. No update, delete, or listing.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores `order` under its own id, replacing any previous entry, and hands it back.
    async fn create(&self, order: Order) -> Result<Order, RepositoryError>;
    async fn get(&self, order_id: &str) -> Result<Option<Order>, RepositoryError>;
}

/// Ordered list of products matched by exact, case-sensitive name.
///
/// Every read hands out copies; the stored entries only change through
/// `add`, `update` and `rename`.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;

    /// Matches on `product`'s own name and writes that same name back, so the
    /// catalog content never changes. Returns `product` whether or not it matched.
    /// Use `rename` to actually change a name.
    async fn update(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Renames the first entry called `old_name` to `product`'s name.
    async fn rename(
        &self,
        old_name: &str,
        product: Product,
    ) -> Result<Option<Product>, RepositoryError>;

    async fn add(&self, product: Product) -> Result<(), RepositoryError>;

    /// Point-in-time snapshot in insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
