pub mod repositories;

pub use repositories::{
    InMemoryOrderRepository, InMemoryProductCatalog, OrderRepository, ProductCatalog,
    RepositoryError,
};
