//! Asana replica REST backend.
//!
//! Requests flow `routes -> services -> database`. Services validate payloads
//! and check parents; every response leaves as `{ "data": ... }`.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use app::app;
pub use state::AppState;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("asana_replica_api=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
