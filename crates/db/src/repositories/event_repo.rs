//! Catalog definition for the `events` table (sports events).

use async_trait::async_trait;
use paddock_core::types::Timestamp;
use sqlx::SqliteConnection;

use super::to_stored_timestamp;
use crate::catalog::{Catalog, CatalogRepo, CatalogShape};
use crate::fixtures;
use crate::models::event::{Event, EventRow};

/// Column list for `events` SELECT queries; every column is sortable.
const COLUMNS: &[&str] = &[
    "id",
    "name",
    "result",
    "location",
    "visible",
    "start_time",
    "end_time",
    "advertised_start_time",
];

pub struct EventCatalog;

pub type EventRepo = CatalogRepo<EventCatalog>;

#[async_trait]
impl Catalog for EventCatalog {
    type Row = EventRow;
    type Record = Event;

    const ENTITY: &'static str = "event";
    const SHAPE: CatalogShape = CatalogShape {
        table: "events",
        columns: COLUMNS,
        group_column: None,
    };
    const SCHEMA: &'static str = "\
        CREATE TABLE IF NOT EXISTS events (\
            id INTEGER PRIMARY KEY, \
            name TEXT NOT NULL, \
            result TEXT NOT NULL, \
            location TEXT NOT NULL, \
            visible BOOLEAN NOT NULL, \
            start_time DATETIME NOT NULL, \
            end_time DATETIME NOT NULL, \
            advertised_start_time DATETIME NOT NULL\
        )";

    fn into_record(row: EventRow, now: Timestamp) -> Event {
        row.into_event(now)
    }

    async fn seed(conn: &mut SqliteConnection, seeded_at: Timestamp) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for row in fixtures::event_rows(seeded_at) {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO events \
                 (id, name, result, location, visible, start_time, end_time, advertised_start_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .bind(row.id)
            .bind(row.name)
            .bind(row.result)
            .bind(row.location)
            .bind(row.visible)
            .bind(to_stored_timestamp(row.start_time))
            .bind(to_stored_timestamp(row.end_time))
            .bind(to_stored_timestamp(row.advertised_start_time))
            .execute(&mut *conn)
            .await?
            .rows_affected();
        }

        Ok(inserted)
    }
}
