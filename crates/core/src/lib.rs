pub mod config;
pub mod domain;
pub mod errors;

pub use domain::order::{NewOrder, Order, OrderId};
pub use domain::product::{default_ingredients, seed_products, Product, DEFAULT_INGREDIENTS};
pub use errors::{ApplicationError, DomainError, InterfaceError};
