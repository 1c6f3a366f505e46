// src/infrastructure/repositories/memory/repository.rs
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::MemoryStore;
use crate::domain::entity::Entity;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repository::Repository;
use crate::domain::specification::{InMemoryEvaluator, Queryable, Specification};

/// Per-entity hooks the generic repository needs from the store.
#[async_trait]
pub trait StoredEntity: Queryable {
    fn table(store: &MemoryStore) -> &RwLock<HashMap<Self::Id, Self>>;

    /// Describes the unique key `self` shares with `other`, if any.
    fn key_clash(&self, other: &Self) -> Option<String>;

    /// Copy kept in the table: no queued events, no loaded relations.
    fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.base_mut().discard_events();
        copy
    }

    /// Rejects `update`/`delete` for tables that only grow.
    fn ensure_mutable(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Resolves eager-load hints for a whole result set at once.
    async fn attach(store: &MemoryStore, rows: &mut [Self], includes: &[Self::Relation]);
}

pub struct MemoryRepository<T> {
    store: Arc<MemoryStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> MemoryRepository<T> {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for MemoryRepository<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.store))
    }
}

fn not_found<T: Entity>(id: T::Id) -> DomainError {
    DomainError::NotFound(format!("{} {id} not found", T::ENTITY_NAME))
}

fn ensure_unique<T: StoredEntity>(
    table: &HashMap<T::Id, T>,
    candidate: &T,
) -> DomainResult<()> {
    let clash = table
        .values()
        .filter(|existing| existing.id() != candidate.id())
        .find_map(|existing| candidate.key_clash(existing));
    match clash {
        Some(message) => Err(DomainError::Conflict(message)),
        None => Ok(()),
    }
}

#[async_trait]
impl<T: StoredEntity> Repository<T> for MemoryRepository<T> {
    async fn get_by_id(&self, id: T::Id) -> DomainResult<T> {
        self.store.ensure_available()?;
        T::table(&self.store)
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    async fn list(&self, spec: &Specification<T>) -> DomainResult<Vec<T>> {
        self.store.ensure_available()?;
        let snapshot: Vec<T> = T::table(&self.store).read().await.values().cloned().collect();

        let mut rows = InMemoryEvaluator::evaluate(snapshot, spec)?;
        if !spec.includes().is_empty() {
            T::attach(&self.store, &mut rows, spec.includes()).await;
        }

        debug!(entity = T::ENTITY_NAME, rows = rows.len(), "memory list");
        Ok(rows)
    }

    async fn first(&self, spec: &Specification<T>) -> DomainResult<T> {
        self.list(spec).await?.into_iter().next().ok_or_else(|| {
            DomainError::NotFound(format!("no {} matches the query", T::ENTITY_NAME))
        })
    }

    async fn count(&self, spec: &Specification<T>) -> DomainResult<u64> {
        self.store.ensure_available()?;
        let spec = spec.count_only();
        let table = T::table(&self.store).read().await;
        Ok(InMemoryEvaluator::count(table.values(), &spec))
    }

    async fn add(&self, mut entity: T) -> DomainResult<T> {
        self.store.ensure_available()?;
        let now = self.store.clock.now();
        entity.base_mut().stamp(now, now);

        let mut table = T::table(&self.store).write().await;
        if table.contains_key(&entity.id()) {
            return Err(DomainError::Conflict(format!(
                "{} {} already exists",
                T::ENTITY_NAME,
                entity.id()
            )));
        }
        ensure_unique(&table, &entity)?;
        table.insert(entity.id(), entity.detached());

        debug!(entity = T::ENTITY_NAME, id = %entity.id(), "memory add");
        Ok(entity)
    }

    async fn update(&self, entity: &T) -> DomainResult<()> {
        entity.ensure_mutable()?;
        self.store.ensure_available()?;
        let mut table = T::table(&self.store).write().await;
        if !table.contains_key(&entity.id()) {
            return Err(not_found::<T>(entity.id()));
        }
        ensure_unique(&table, entity)?;
        table.insert(entity.id(), entity.detached());
        Ok(())
    }

    async fn delete(&self, entity: &T) -> DomainResult<()> {
        entity.ensure_mutable()?;
        self.store.ensure_available()?;
        T::table(&self.store)
            .write()
            .await
            .remove(&entity.id())
            .map(|_| ())
            .ok_or_else(|| not_found::<T>(entity.id()))
    }
}
