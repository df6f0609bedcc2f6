//! Catalog definitions and their repositories.
//!
//! Each module implements [`crate::catalog::Catalog`] for one table and
//! exposes a `CatalogRepo` alias for it.

pub mod event_repo;
pub mod race_repo;

pub use event_repo::{EventCatalog, EventRepo};
pub use race_repo::{RaceCatalog, RaceRepo};

use chrono::SecondsFormat;
use paddock_core::types::Timestamp;

/// Storage format for catalog timestamps: RFC 3339, whole seconds, `Z`.
///
/// Fixed width, so text ordering in SQLite matches time ordering.
pub(crate) fn to_stored_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
