//! Race entity model.

use paddock_core::status::RecordStatus;
use paddock_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `races` table exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RaceRow {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
}

/// A race as returned to callers, with its read-time status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: DbId,
    pub meeting_id: DbId,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Timestamp,
    pub status: RecordStatus,
}

impl RaceRow {
    pub fn into_race(self, now: Timestamp) -> Race {
        Race {
            status: RecordStatus::derive(self.advertised_start_time, now),
            id: self.id,
            meeting_id: self.meeting_id,
            name: self.name,
            number: self.number,
            visible: self.visible,
            advertised_start_time: self.advertised_start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn row(advertised_start_time: Timestamp) -> RaceRow {
        RaceRow {
            id: 7,
            meeting_id: 3,
            name: "Ohio hawks".to_string(),
            number: 2,
            visible: true,
            advertised_start_time,
        }
    }

    #[test]
    fn status_follows_advertised_start() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(row(now).into_race(now).status, RecordStatus::Closed);
        assert_eq!(
            row(now + Duration::seconds(1)).into_race(now).status,
            RecordStatus::Open
        );
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_value(row(now + Duration::hours(1)).into_race(now)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "meetingId": 3,
                "name": "Ohio hawks",
                "number": 2,
                "visible": true,
                "advertisedStartTime": "2024-06-01T13:00:00Z",
                "status": "OPEN",
            })
        );
    }
}
