pub mod entity;
pub mod filter;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod store;

use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};

pub use entity::{Entity, EntityKind};
pub use filter::Filter;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::Repository;
pub use store::{DocumentStore, StoreError, StoreResult};

/// Build the store selected by config.
pub async fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Postgres => Ok(Arc::new(PgStore::connect(config).await?)),
    }
}
