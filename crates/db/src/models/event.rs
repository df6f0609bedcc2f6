//! Sports event entity model.

use paddock_core::status::RecordStatus;
use paddock_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `events` table exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: DbId,
    pub name: String,
    pub result: String,
    pub location: String,
    pub visible: bool,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub advertised_start_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub result: String,
    pub location: String,
    pub visible: bool,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub advertised_start_time: Timestamp,
    pub status: RecordStatus,
}

impl EventRow {
    pub fn into_event(self, now: Timestamp) -> Event {
        Event {
            status: RecordStatus::derive(self.advertised_start_time, now),
            id: self.id,
            name: self.name,
            result: self.result,
            location: self.location,
            visible: self.visible,
            start_time: self.start_time,
            end_time: self.end_time,
            advertised_start_time: self.advertised_start_time,
        }
    }
}
