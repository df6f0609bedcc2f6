//! Translate a [`ListFilter`] into parameterized SQL.
//!
//! Filter values are always bound. The only text spliced into the statement
//! is the sort column and direction, and only after the column has been
//! matched against the catalog's allow-list.

use paddock_core::error::CoreError;
use paddock_core::filter::ListFilter;

use super::CatalogShape;

/// Typed bind value for dynamically-built catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Bool(bool),
}

/// Final statement text plus its ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Build the `SELECT` for a filtered list query.
///
/// `limit` caps the number of rows (used by single-record lookups).
pub fn build_list_query(
    shape: &CatalogShape,
    filter: &ListFilter,
    limit: Option<u32>,
) -> Result<BuiltQuery, CoreError> {
    let mut conditions: Vec<String> = Vec::new();
    let mut binds: Vec<BindValue> = Vec::new();
    let mut bind_idx = 1u32;

    if let Some(id) = filter.id {
        conditions.push(format!("id = ?{bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::BigInt(id));
    }

    if let Some(visible) = filter.visibility.predicate_value() {
        conditions.push(format!("visible = ?{bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Bool(visible));
    }

    if let Some(ref group_ids) = filter.group_ids {
        let column = shape.group_column.ok_or_else(|| {
            CoreError::InvalidFilter(format!("{} cannot be filtered by group ids", shape.table))
        })?;

        if group_ids.is_empty() {
            conditions.push("1 = 0".to_string());
        } else {
            let mut placeholders = Vec::with_capacity(group_ids.len());
            for group_id in group_ids {
                placeholders.push(format!("?{bind_idx}"));
                bind_idx += 1;
                binds.push(BindValue::BigInt(*group_id));
            }
            conditions.push(format!("{column} IN ({})", placeholders.join(", ")));
        }
    }

    let mut sql = format!("SELECT {} FROM {}", shape.columns.join(", "), shape.table);

    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }

    if let Some(ref sort) = filter.sort {
        if !shape.has_column(&sort.column) {
            return Err(CoreError::InvalidFilter(format!(
                "unknown sort column '{}' for {}",
                sort.column, shape.table
            )));
        }

        let column = sort.column.as_str();
        sql.push_str(&format!(" ORDER BY {column} {}", sort.direction.as_sql()));
        // Ties keep rowid order.
        if column != "id" {
            sql.push_str(", id ASC");
        }
    }

    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT ?{bind_idx}"));
        binds.push(BindValue::BigInt(i64::from(limit)));
    }

    Ok(BuiltQuery { sql, binds })
}
