//! In-memory document store, the default backend and the one tests run on.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::entity::EntityKind;
use super::filter::Filter;
use super::store::{DocumentStore, StoreError, StoreResult};

#[derive(Debug)]
struct StoredRecord {
    kind: EntityKind,
    seq: u64,
    body: Value,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_seq: u64,
    // Keyed by gid alone so uniqueness holds across kinds.
    records: HashMap<String, StoredRecord>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_unique(&self, kind: EntityKind, gid: &str) -> StoreResult<Option<Value>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .get(gid)
            .filter(|r| r.kind == kind)
            .map(|r| r.body.clone()))
    }

    async fn find_many(&self, kind: EntityKind, filter: &Filter) -> StoreResult<Vec<Value>> {
        let inner = self.inner.read().await;
        let mut matched: Vec<&StoredRecord> = inner
            .records
            .values()
            .filter(|r| r.kind == kind && filter.matches(&r.body))
            .collect();
        matched.sort_by_key(|r| r.seq);

        let bodies = matched.into_iter().map(|r| r.body.clone()).collect();
        Ok(filter.paginate(bodies))
    }

    async fn create(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value> {
        let mut inner = self.inner.write().await;
        if inner.records.contains_key(gid) {
            return Err(StoreError::already_exists(kind, gid));
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(
            gid.to_string(),
            StoredRecord {
                kind,
                seq,
                body: doc.clone(),
            },
        );
        Ok(doc)
    }

    async fn update(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value> {
        let mut inner = self.inner.write().await;
        match inner.records.get_mut(gid) {
            Some(record) if record.kind == kind => {
                record.body = doc.clone();
                Ok(doc)
            }
            _ => Err(StoreError::not_found(kind, gid)),
        }
    }

    async fn delete(&self, kind: EntityKind, gid: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let owned = inner.records.get(gid).is_some_and(|r| r.kind == kind);
        if owned {
            inner.records.remove(gid);
        }
        Ok(owned)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
