//! Generic read-only catalog engine.
//!
//! A catalog is described once by implementing [`Catalog`] (table, columns,
//! optional grouping column, schema, row mapping, fixtures). The query
//! builder, record materializer and [`CatalogRepo`] are shared by every
//! catalog.

pub mod materialize;
pub mod query;
pub mod repository;

use async_trait::async_trait;
use paddock_core::types::Timestamp;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqliteConnection};

pub use repository::{CatalogRepo, SeedReport};

/// Static description of a catalog table used by the query builder.
#[derive(Debug, Clone, Copy)]
pub struct CatalogShape {
    pub table: &'static str,
    /// Projection list. Also the allow-list for `ORDER BY` identifiers.
    pub columns: &'static [&'static str],
    /// Column matched by `group_ids`, if the catalog has one.
    pub group_column: Option<&'static str>,
}

impl CatalogShape {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(&column)
    }
}

#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Stored row, decoded straight from the projection.
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;
    /// Record handed to callers, including derived fields.
    type Record: Send;

    /// Human readable name used in logs and errors.
    const ENTITY: &'static str;
    const SHAPE: CatalogShape;
    /// Idempotent DDL for the catalog table.
    const SCHEMA: &'static str;

    fn into_record(row: Self::Row, now: Timestamp) -> Self::Record;

    /// Insert the fixture rows, skipping ids that already exist.
    ///
    /// Returns the number of rows actually inserted.
    async fn seed(conn: &mut SqliteConnection, seeded_at: Timestamp) -> Result<u64, sqlx::Error>;
}
