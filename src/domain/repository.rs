// src/domain/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::specification::{Queryable, Specification};
use async_trait::async_trait;

/// Generic persistence facade over one entity type; the only component that
/// talks to the store.
///
/// Every write is its own unit of work. None of these operations publish the
/// entity's pending events; callers hand them to the dispatcher once the
/// write has returned.
#[async_trait]
pub trait Repository<T: Queryable>: Send + Sync {
    /// Direct lookup; `NotFound` when absent.
    async fn get_by_id(&self, id: T::Id) -> DomainResult<T>;

    async fn list(&self, spec: &Specification<T>) -> DomainResult<Vec<T>>;

    /// First row of the specification's result; `NotFound` when empty.
    async fn first(&self, spec: &Specification<T>) -> DomainResult<T>;

    /// Total matching rows, ignoring ordering, paging and includes.
    async fn count(&self, spec: &Specification<T>) -> DomainResult<u64>;

    async fn exists(&self, spec: &Specification<T>) -> DomainResult<bool> {
        Ok(self.count(spec).await? > 0)
    }

    /// Stores a new entity, applying persistence defaults. The returned
    /// entity still carries the pending events of the original.
    async fn add(&self, entity: T) -> DomainResult<T>;

    /// Replaces every stored field of an existing entity.
    async fn update(&self, entity: &T) -> DomainResult<()>;

    /// Hard delete. Soft-deletable entities flip their flag and call `update`.
    async fn delete(&self, entity: &T) -> DomainResult<()>;
}
