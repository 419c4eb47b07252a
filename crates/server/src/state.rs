use std::sync::Arc;

use pizzeria_db::{
    InMemoryOrderRepository, InMemoryProductCatalog, OrderRepository, ProductCatalog,
};

/// Stores shared by every handler. Built once during bootstrap.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
}

impl AppState {
    pub fn new(orders: Arc<dyn OrderRepository>, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { orders, catalog }
    }

    /// Empty order book and the default ingredient list.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryOrderRepository::default()),
            Arc::new(InMemoryProductCatalog::with_default_ingredients()),
        )
    }
}
