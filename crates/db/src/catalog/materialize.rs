//! Turn fetched rows into catalog records.

use paddock_core::types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

use super::Catalog;
use crate::error::QueryError;

/// Decode `rows` in order, deriving every record against the same `now`.
///
/// The first undecodable row aborts the whole pass; nothing partial is
/// returned.
pub fn materialize<C: Catalog>(
    rows: &[SqliteRow],
    now: Timestamp,
) -> Result<Vec<C::Record>, QueryError> {
    rows.iter()
        .enumerate()
        .map(|(row_index, row)| {
            C::Row::from_row(row)
                .map(|stored| C::into_record(stored, now))
                .map_err(|source| QueryError::Scan { row_index, source })
        })
        .collect()
}
