// src/domain/specification/criteria.rs
use super::{Queryable, value::Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Comparison::Eq => ordering == Ordering::Equal,
            Comparison::Ne => ordering != Ordering::Equal,
            Comparison::Lt => ordering == Ordering::Less,
            Comparison::Le => ordering != Ordering::Greater,
            Comparison::Gt => ordering == Ordering::Greater,
            Comparison::Ge => ordering != Ordering::Less,
        }
    }

    pub fn sql_operator(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "<>",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

/// Filter expression over the queryable fields `F` of one entity type.
///
/// Comparing against [`Value::Null`] with `Eq`/`Ne` means "is null" /
/// "is not null"; every other comparison involving a null is false.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria<F> {
    Compare { field: F, op: Comparison, value: Value },
    /// Case-insensitive substring match on a text field.
    Contains { field: F, needle: String },
    IsNull(F),
    In { field: F, values: Vec<Value> },
    All(Vec<Criteria<F>>),
    Any(Vec<Criteria<F>>),
    Not(Box<Criteria<F>>),
}

impl<F: Copy> Criteria<F> {
    pub fn compare(field: F, op: Comparison, value: impl Into<Value>) -> Self {
        Criteria::Compare {
            field,
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Eq, value)
    }

    pub fn ne(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Ne, value)
    }

    pub fn lt(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Lt, value)
    }

    pub fn le(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Le, value)
    }

    pub fn gt(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Gt, value)
    }

    pub fn ge(field: F, value: impl Into<Value>) -> Self {
        Self::compare(field, Comparison::Ge, value)
    }

    pub fn contains(field: F, needle: impl Into<String>) -> Self {
        Criteria::Contains {
            field,
            needle: needle.into(),
        }
    }

    pub fn is_null(field: F) -> Self {
        Criteria::IsNull(field)
    }

    pub fn is_in<V: Into<Value>>(field: F, values: impl IntoIterator<Item = V>) -> Self {
        Criteria::In {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(self, other: Criteria<F>) -> Self {
        match self {
            Criteria::All(mut parts) => {
                parts.push(other);
                Criteria::All(parts)
            }
            first => Criteria::All(vec![first, other]),
        }
    }

    pub fn or(self, other: Criteria<F>) -> Self {
        match self {
            Criteria::Any(mut parts) => {
                parts.push(other);
                Criteria::Any(parts)
            }
            first => Criteria::Any(vec![first, other]),
        }
    }

    pub fn negate(self) -> Self {
        Criteria::Not(Box::new(self))
    }

    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Queryable<Field = F>,
    {
        match self {
            Criteria::Compare { field, op, value } => {
                let actual = item.field_value(*field);
                match (op, value.is_null()) {
                    (Comparison::Eq, true) => actual.is_null(),
                    (Comparison::Ne, true) => !actual.is_null(),
                    _ => actual
                        .partial_compare(value)
                        .is_some_and(|ordering| op.holds(ordering)),
                }
            }
            Criteria::Contains { field, needle } => item
                .field_value(*field)
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
            Criteria::IsNull(field) => item.field_value(*field).is_null(),
            Criteria::In { field, values } => {
                let actual = item.field_value(*field);
                values
                    .iter()
                    .any(|candidate| actual.partial_compare(candidate) == Some(Ordering::Equal))
            }
            Criteria::All(parts) => parts.iter().all(|part| part.matches(item)),
            Criteria::Any(parts) => parts.iter().any(|part| part.matches(item)),
            Criteria::Not(inner) => !inner.matches(item),
        }
    }
}
