//! Catalog definition for the `races` table.

use async_trait::async_trait;
use paddock_core::types::Timestamp;
use sqlx::SqliteConnection;

use super::to_stored_timestamp;
use crate::catalog::{Catalog, CatalogRepo, CatalogShape};
use crate::fixtures;
use crate::models::race::{Race, RaceRow};

/// Column list for `races` SELECT queries; every column is sortable.
const COLUMNS: &[&str] = &[
    "id",
    "meeting_id",
    "name",
    "number",
    "visible",
    "advertised_start_time",
];

pub struct RaceCatalog;

pub type RaceRepo = CatalogRepo<RaceCatalog>;

#[async_trait]
impl Catalog for RaceCatalog {
    type Row = RaceRow;
    type Record = Race;

    const ENTITY: &'static str = "race";
    const SHAPE: CatalogShape = CatalogShape {
        table: "races",
        columns: COLUMNS,
        group_column: Some("meeting_id"),
    };
    const SCHEMA: &'static str = "\
        CREATE TABLE IF NOT EXISTS races (\
            id INTEGER PRIMARY KEY, \
            meeting_id INTEGER NOT NULL, \
            name TEXT NOT NULL, \
            number INTEGER NOT NULL, \
            visible BOOLEAN NOT NULL, \
            advertised_start_time DATETIME NOT NULL\
        )";

    fn into_record(row: RaceRow, now: Timestamp) -> Race {
        row.into_race(now)
    }

    async fn seed(conn: &mut SqliteConnection, seeded_at: Timestamp) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for row in fixtures::race_rows(seeded_at) {
            inserted += sqlx::query(
                "INSERT OR IGNORE INTO races \
                 (id, meeting_id, name, number, visible, advertised_start_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(row.id)
            .bind(row.meeting_id)
            .bind(row.name)
            .bind(row.number)
            .bind(row.visible)
            .bind(to_stored_timestamp(row.advertised_start_time))
            .execute(&mut *conn)
            .await?
            .rows_affected();
        }

        Ok(inserted)
    }
}
