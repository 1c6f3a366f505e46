// src/domain/specification/mod.rs
//! Storage-agnostic query descriptions.
//!
//! A [`Specification`] says which rows to return (criteria), in what order,
//! with which related data attached and in what page window. Store adapters
//! translate it; nothing here executes I/O.
pub mod criteria;
pub mod evaluator;
pub mod value;

pub use criteria::{Comparison, Criteria};
pub use evaluator::InMemoryEvaluator;
pub use value::Value;

use crate::domain::entity::Entity;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt::Debug;

/// A field an entity exposes to specifications.
pub trait FieldRef: Copy + Eq + Debug + Send + Sync + 'static {
    /// Column name used by SQL stores.
    fn column(&self) -> &'static str;
}

/// An entity that can be filtered, ordered and eager-loaded.
pub trait Queryable: Entity {
    type Field: FieldRef;
    type Relation: Copy + Eq + Debug + Send + Sync + 'static;

    /// Identity field, appended as the final tie-break of every ordering.
    const ID_FIELD: Self::Field;

    fn field_value(&self, field: Self::Field) -> Value;
}

/// Placeholder relation type for entities without eager-loadable relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRelation {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy<F> {
    pub field: F,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: u64,
    pub take: u64,
}

#[derive(Debug, Clone)]
pub struct Specification<T: Queryable> {
    criteria: Option<Criteria<T::Field>>,
    ordering: Vec<OrderBy<T::Field>>,
    includes: Vec<T::Relation>,
    paging: Option<Paging>,
    read_only: bool,
}

impl<T: Queryable> Default for Specification<T> {
    fn default() -> Self {
        Self {
            criteria: None,
            ordering: Vec::new(),
            includes: Vec::new(),
            paging: None,
            read_only: false,
        }
    }
}

impl<T: Queryable> Specification<T> {
    /// Matches every row.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matching(criteria: Criteria<T::Field>) -> Self {
        Self::new().filter(criteria)
    }

    /// Adds a criterion; repeated calls are combined with AND.
    pub fn filter(mut self, criteria: Criteria<T::Field>) -> Self {
        self.criteria = Some(match self.criteria.take() {
            Some(existing) => existing.and(criteria),
            None => criteria,
        });
        self
    }

    /// Appends an ascending key. The first key is primary, later keys break ties.
    pub fn order_by(self, field: T::Field) -> Self {
        self.push_order(field, SortDirection::Ascending)
    }

    pub fn order_by_desc(self, field: T::Field) -> Self {
        self.push_order(field, SortDirection::Descending)
    }

    fn push_order(mut self, field: T::Field, direction: SortDirection) -> Self {
        self.ordering.push(OrderBy { field, direction });
        self
    }

    pub fn include(mut self, relation: T::Relation) -> Self {
        if !self.includes.contains(&relation) {
            self.includes.push(relation);
        }
        self
    }

    pub fn page(mut self, skip: u64, take: u64) -> Self {
        self.paging = Some(Paging { skip, take });
        self
    }

    /// 1-based page number helper over [`Specification::page`].
    pub fn paginate(self, page: u64, per_page: u64) -> Self {
        let skip = page.saturating_sub(1).saturating_mul(per_page);
        self.page(skip, per_page)
    }

    /// Allows the store to serve the query from its read-optimised path.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn criteria(&self) -> Option<&Criteria<T::Field>> {
        self.criteria.as_ref()
    }

    pub fn ordering(&self) -> &[OrderBy<T::Field>] {
        &self.ordering
    }

    pub fn includes(&self) -> &[T::Relation] {
        &self.includes
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Ordering keys as executed: the declared keys followed by the identity
    /// field so that ties never make page boundaries unstable.
    pub fn effective_ordering(&self) -> Vec<OrderBy<T::Field>> {
        let mut ordering = self.ordering.clone();
        if !ordering.iter().any(|key| key.field == T::ID_FIELD) {
            ordering.push(OrderBy {
                field: T::ID_FIELD,
                direction: SortDirection::Ascending,
            });
        }
        ordering
    }

    pub fn without_paging(&self) -> Self {
        Self {
            paging: None,
            ..self.clone()
        }
    }

    /// Keeps only the criteria; what a count needs.
    pub fn count_only(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            read_only: self.read_only,
            ..Self::default()
        }
    }

    pub fn is_satisfied_by(&self, item: &T) -> bool {
        self.criteria
            .as_ref()
            .is_none_or(|criteria| criteria.matches(item))
    }

    /// Rejects specifications whose pages would not be deterministic.
    pub fn validate(&self) -> DomainResult<()> {
        if self.paging.is_some() && self.ordering.is_empty() {
            return Err(DomainError::InvalidOperation(format!(
                "paged {} specification requires an ordering",
                T::ENTITY_NAME
            )));
        }
        Ok(())
    }
}
