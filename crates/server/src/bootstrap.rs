use std::sync::Arc;

use axum::Router;
use pizzeria_core::config::{AppConfig, ConfigError, LoadOptions};
use pizzeria_core::domain::product::seed_products;
use pizzeria_core::errors::DomainError;
use pizzeria_db::{InMemoryOrderRepository, InMemoryProductCatalog};
use thiserror::Error;
use tracing::info;

use crate::{api, state::AppState};

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub fn router(&self) -> Router {
        api::app(self.state.clone())
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("catalog seed rejected: {0}")]
    CatalogSeed(#[source] DomainError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

/// Builds the stores from an already loaded config. The binary calls this
/// directly because it needs the config before logging is up.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        seed_size = config.catalog.seed.len(),
        "starting application bootstrap"
    );
    let products =
        seed_products(config.catalog.seed.iter().cloned()).map_err(BootstrapError::CatalogSeed)?;
    let product_count = products.len();

    let state = AppState::new(
        Arc::new(InMemoryOrderRepository::default()),
        Arc::new(InMemoryProductCatalog::new(products)),
    );
    info!(
        event_name = "system.bootstrap.catalog_seeded",
        correlation_id = "bootstrap",
        product_count,
        "ingredient catalog seeded"
    );

    Ok(Application { config, state })
}
