// src/domain/specification/evaluator.rs
use super::{OrderBy, Queryable, SortDirection, Specification, Value};
use crate::domain::errors::DomainResult;
use std::cmp::Ordering;

/// Executes the filter, ordering and paging steps of a specification over
/// rows already in memory. Eager-load hints are left to the store, which owns
/// the related tables.
pub struct InMemoryEvaluator;

impl InMemoryEvaluator {
    pub fn evaluate<T, I>(rows: I, spec: &Specification<T>) -> DomainResult<Vec<T>>
    where
        T: Queryable,
        I: IntoIterator<Item = T>,
    {
        spec.validate()?;

        let ordering = spec.effective_ordering();
        let mut keyed: Vec<(Vec<Value>, T)> = rows
            .into_iter()
            .filter(|row| spec.is_satisfied_by(row))
            .map(|row| {
                let keys = ordering
                    .iter()
                    .map(|key| row.field_value(key.field))
                    .collect();
                (keys, row)
            })
            .collect();

        keyed.sort_by(|(left, _), (right, _)| compare_keys(&ordering, left, right));

        let rows = keyed.into_iter().map(|(_, row)| row);
        let page = match spec.paging() {
            Some(paging) => rows
                .skip(usize::try_from(paging.skip).unwrap_or(usize::MAX))
                .take(usize::try_from(paging.take).unwrap_or(usize::MAX))
                .collect(),
            None => rows.collect(),
        };
        Ok(page)
    }

    /// Count-only variant: applies the criteria and nothing else.
    pub fn count<'a, T, I>(rows: I, spec: &Specification<T>) -> u64
    where
        T: Queryable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        rows.into_iter()
            .filter(|row| spec.is_satisfied_by(row))
            .count() as u64
    }
}

fn compare_keys<F>(ordering: &[OrderBy<F>], left: &[Value], right: &[Value]) -> Ordering {
    for ((key, l), r) in ordering.iter().zip(left).zip(right) {
        // Descending reverses the whole comparison, so nulls come first there,
        // as they do in Postgres.
        let ordering = match key.direction {
            SortDirection::Ascending => l.sort_cmp(r),
            SortDirection::Descending => r.sort_cmp(l),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}
