pub mod api;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod runtime;
pub mod state;

pub use bootstrap::{bootstrap, bootstrap_with_config, Application, BootstrapError};
pub use runtime::serve_until;
pub use state::AppState;
