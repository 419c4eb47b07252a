use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use pizzeria_core::domain::order::Order;
use pizzeria_core::domain::product::{default_ingredients, Product};

use super::{OrderRepository, ProductCatalog, RepositoryError};

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.order_id().as_str().to_owned(), order.clone());
        Ok(order)
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }
}

/// Catalog backed by one `Vec` under a single read/write lock, so readers
/// never see a half-applied append or rename.
#[derive(Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: RwLock::new(products) }
    }

    pub fn with_default_ingredients() -> Self {
        Self::new(default_ingredients())
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.name() == name).cloned())
    }

    async fn find_all_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|product| product.name() == name).cloned().collect())
    }

    async fn update(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let matched = match products.iter_mut().find(|existing| existing.name() == product.name()) {
            Some(existing) => {
                existing.set_name(product.name())?;
                true
            }
            None => false,
        };
        debug!(
            event_name = "catalog.product.updated",
            product = %product.name(),
            matched,
            "catalog update left entries unchanged"
        );
        Ok(product)
    }

    async fn rename(
        &self,
        old_name: &str,
        product: Product,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.write().await;
        let Some(existing) = products.iter_mut().find(|existing| existing.name() == old_name)
        else {
            return Ok(None);
        };
        existing.set_name(product.into_name())?;
        info!(
            event_name = "catalog.product.renamed",
            from = %old_name,
            to = %existing.name(),
            "catalog product renamed"
        );
        Ok(Some(existing.clone()))
    }

    async fn add(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        info!(
            event_name = "catalog.product.added",
            product = %product.name(),
            product_count = products.len() + 1,
            "catalog product added"
        );
        products.push(product);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.clone())
    }
}
