// src/infrastructure/repositories/postgres/query.rs
//! Renders specifications into parameterised Postgres statements.
use sqlx::{Postgres, QueryBuilder};

use crate::domain::errors::DomainResult;
use crate::domain::specification::{
    Comparison, Criteria, FieldRef, OrderBy, Queryable, SortDirection, Specification, Value,
};

/// Table an entity is stored in, with its selected column list.
pub trait SqlTable: Queryable {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
}

/// `SELECT … WHERE … ORDER BY … OFFSET … LIMIT …` for a specification.
pub fn select_query<T: SqlTable>(
    spec: &Specification<T>,
) -> DomainResult<QueryBuilder<'static, Postgres>> {
    spec.validate()?;

    let mut builder = QueryBuilder::new(format!("SELECT {} FROM {}", T::COLUMNS, T::TABLE));
    push_where(&mut builder, spec.criteria());
    push_order_by(&mut builder, &spec.effective_ordering());

    if let Some(paging) = spec.paging() {
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(paging.skip).unwrap_or(i64::MAX));
        builder.push(" LIMIT ");
        builder.push_bind(i64::try_from(paging.take).unwrap_or(i64::MAX));
    }
    Ok(builder)
}

pub fn count_query<T: SqlTable>(spec: &Specification<T>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", T::TABLE));
    push_where(&mut builder, spec.criteria());
    builder
}

fn push_where<F: FieldRef>(
    builder: &mut QueryBuilder<'static, Postgres>,
    criteria: Option<&Criteria<F>>,
) {
    if let Some(criteria) = criteria {
        builder.push(" WHERE ");
        push_criteria(builder, criteria);
    }
}

fn push_order_by<F: FieldRef>(builder: &mut QueryBuilder<'static, Postgres>, keys: &[OrderBy<F>]) {
    for (index, key) in keys.iter().enumerate() {
        builder.push(if index == 0 { " ORDER BY " } else { ", " });
        builder.push(key.field.column());
        builder.push(match key.direction {
            SortDirection::Ascending => " ASC",
            SortDirection::Descending => " DESC",
        });
    }
}

fn push_criteria<F: FieldRef>(
    builder: &mut QueryBuilder<'static, Postgres>,
    criteria: &Criteria<F>,
) {
    match criteria {
        Criteria::Compare { field, op, value } => match (op, value.is_null()) {
            (Comparison::Eq, true) => {
                builder.push(field.column()).push(" IS NULL");
            }
            (Comparison::Ne, true) => {
                builder.push(field.column()).push(" IS NOT NULL");
            }
            (_, true) => {
                builder.push("FALSE");
            }
            (op, false) => {
                builder
                    .push(field.column())
                    .push(" ")
                    .push(op.sql_operator())
                    .push(" ");
                push_value(builder, value);
            }
        },
        Criteria::Contains { field, needle } => {
            builder.push(field.column()).push(" ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(needle)));
        }
        Criteria::IsNull(field) => {
            builder.push(field.column()).push(" IS NULL");
        }
        Criteria::In { field, values } => {
            if values.is_empty() {
                builder.push("FALSE");
                return;
            }
            builder.push(field.column()).push(" IN (");
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    builder.push(", ");
                }
                push_value(builder, value);
            }
            builder.push(")");
        }
        Criteria::All(parts) => push_joined(builder, parts, " AND ", "TRUE"),
        Criteria::Any(parts) => push_joined(builder, parts, " OR ", "FALSE"),
        // SQL NULL would make NOT(x) unknown; coalescing keeps the in-memory
        // two-valued result.
        Criteria::Not(inner) => {
            builder.push("NOT COALESCE((");
            push_criteria(builder, inner);
            builder.push("), FALSE)");
        }
    }
}

fn push_joined<F: FieldRef>(
    builder: &mut QueryBuilder<'static, Postgres>,
    parts: &[Criteria<F>],
    separator: &str,
    empty: &str,
) {
    if parts.is_empty() {
        builder.push(empty);
        return;
    }
    builder.push("(");
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            builder.push(separator);
        }
        push_criteria(builder, part);
    }
    builder.push(")");
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Null => {
            builder.push("NULL");
        }
        Value::Bool(value) => {
            builder.push_bind(*value);
        }
        Value::Int(value) => {
            builder.push_bind(*value);
        }
        Value::Text(value) => {
            builder.push_bind(value.clone());
        }
        Value::Uuid(value) => {
            builder.push_bind(*value);
        }
        Value::Timestamp(value) => {
            builder.push_bind(*value);
        }
    }
}

fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
