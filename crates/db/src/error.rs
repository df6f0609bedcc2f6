//! Error types for catalog initialisation and queries.

use std::time::Duration;

use paddock_core::error::CoreError;

/// Failure while preparing a catalog for reads. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to create {entity} schema: {source}")]
    Schema {
        entity: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to seed {entity} fixtures: {source}")]
    Seed {
        entity: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Failure of a `list` / `get` call.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Rejected before anything was sent to the store.
    #[error(transparent)]
    InvalidFilter(#[from] CoreError),

    /// `init` has not completed for this catalog.
    #[error("Catalog is not ready")]
    NotReady,

    /// The store rejected or failed the query. Safe to retry.
    #[error("Query execution failed: {0}")]
    Execution(#[source] sqlx::Error),

    /// A row could not be decoded. Retrying reproduces the failure.
    #[error("Failed to decode row {row_index}: {source}")]
    Scan {
        row_index: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("Query exceeded its {0:?} deadline")]
    Timeout(Duration),
}
