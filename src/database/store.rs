use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::entity::EntityKind;
use super::filter::Filter;

/// Errors raised by a `DocumentStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} with gid {gid} not found")]
    NotFound { kind: EntityKind, gid: String },

    /// gids are unique across every kind, not just within one.
    #[error("{kind} with gid {gid} already exists")]
    AlreadyExists { kind: EntityKind, gid: String },

    /// A unique index other than the gid key rejected the write.
    #[error("{kind} duplicates an existing record ({index})")]
    Conflict { kind: EntityKind, index: String },

    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, gid: impl Into<String>) -> Self {
        Self::NotFound { kind, gid: gid.into() }
    }

    pub fn already_exists(kind: EntityKind, gid: impl Into<String>) -> Self {
        Self::AlreadyExists { kind, gid: gid.into() }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence boundary: JSON documents keyed by `(kind, gid)`.
///
/// Lookups report absence as `None`, never as an error. `find_many` returns
/// documents in insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short label for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    async fn find_unique(&self, kind: EntityKind, gid: &str) -> StoreResult<Option<Value>>;

    async fn find_many(&self, kind: EntityKind, filter: &Filter) -> StoreResult<Vec<Value>>;

    async fn create(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value>;

    async fn update(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value>;

    /// Returns whether a record was removed.
    async fn delete(&self, kind: EntityKind, gid: &str) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()>;
}
