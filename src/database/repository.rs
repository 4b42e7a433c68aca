use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use super::entity::Entity;
use super::filter::Filter;
use super::store::{DocumentStore, StoreError, StoreResult};

/// Typed view of one entity kind inside a `DocumentStore`.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    pub async fn select_one(&self, gid: &str) -> StoreResult<Option<T>> {
        match self.store.find_unique(T::KIND, gid).await? {
            Some(doc) => Ok(Some(decode(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn select_404(&self, gid: &str) -> StoreResult<T> {
        self.select_one(gid)
            .await?
            .ok_or_else(|| StoreError::not_found(T::KIND, gid))
    }

    pub async fn select_any(&self, filter: &Filter) -> StoreResult<Vec<T>> {
        self.store
            .find_many(T::KIND, filter)
            .await?
            .into_iter()
            .map(decode::<T>)
            .collect()
    }

    pub async fn insert(&self, entity: T) -> StoreResult<T> {
        let doc = serde_json::to_value(&entity)?;
        let stored = self.store.create(T::KIND, entity.gid(), doc).await?;
        decode(stored)
    }

    pub async fn update(&self, entity: T) -> StoreResult<T> {
        let doc = serde_json::to_value(&entity)?;
        let stored = self.store.update(T::KIND, entity.gid(), doc).await?;
        decode(stored)
    }

    pub async fn delete(&self, gid: &str) -> StoreResult<bool> {
        self.store.delete(T::KIND, gid).await
    }
}

fn decode<T: Entity>(doc: Value) -> StoreResult<T> {
    Ok(serde_json::from_value(doc)?)
}
