//! Deterministic fixture rows seeded into each catalog at startup.
//!
//! Values are derived arithmetically from the row id so every process (and
//! every test) sees the same catalog shape. Only the timestamps move: they
//! are spread around the seeding instant so both OPEN and CLOSED records
//! exist.
//!
//! Races: `meeting_id = (3 * id mod 13) mod 10 + 1`, visible when
//! `37 * id mod 100 < 54`. Events: visible when `41 * id mod 100 < 51`.

use chrono::{Duration, SubsecRound};
use paddock_core::types::{DbId, Timestamp};

use crate::models::event::EventRow;
use crate::models::race::RaceRow;

pub const RACE_COUNT: DbId = 100;
pub const EVENT_COUNT: DbId = 100;

const DAY_SECS: i64 = 86_400;

const STATES: &[&str] = &[
    "Virginia",
    "Ohio",
    "Texas",
    "Oregon",
    "Nevada",
    "Maine",
    "Kansas",
    "Georgia",
    "Utah",
    "Idaho",
    "Vermont",
    "Alabama",
];

const MASCOTS: &[&str] = &[
    "wolves", "hawks", "bears", "comets", "rangers", "pilots", "foxes", "giants", "owls",
    "storm", "lions",
];

const CITIES: &[&str] = &[
    "Melbourne",
    "Sydney",
    "Brisbane",
    "Perth",
    "Adelaide",
    "Hobart",
    "Darwin",
    "Cairns",
    "Geelong",
    "Ballarat",
    "Bendigo",
    "Townsville",
    "Newcastle",
];

fn pick(list: &'static [&'static str], seed: DbId) -> &'static str {
    list[seed.rem_euclid(list.len() as i64) as usize]
}

/// Advertised start spread over `[base - 1d, base + 2d)`.
fn advertised_start(base: Timestamp, id: DbId) -> Timestamp {
    base + Duration::seconds((id * 7_919) % (3 * DAY_SECS) - DAY_SECS)
}

pub fn race_rows(seeded_at: Timestamp) -> Vec<RaceRow> {
    let base = seeded_at.trunc_subsecs(0);

    (1..=RACE_COUNT)
        .map(|id| RaceRow {
            id,
            meeting_id: (3 * id % 13) % 10 + 1,
            name: format!("{} {}", pick(STATES, id), pick(MASCOTS, id * 7)),
            number: (7 * id) % 12 + 1,
            visible: (37 * id) % 100 < 54,
            advertised_start_time: advertised_start(base, id),
        })
        .collect()
}

pub fn event_rows(seeded_at: Timestamp) -> Vec<EventRow> {
    let base = seeded_at.trunc_subsecs(0);

    (1..=EVENT_COUNT)
        .map(|id| EventRow {
            id,
            name: format!("{} {}", pick(STATES, id * 5), pick(MASCOTS, id)),
            result: format!("{} - {}", (3 * id) % 5, (7 * id) % 4),
            location: pick(CITIES, id).to_string(),
            visible: (41 * id) % 100 < 51,
            // Start within the last day, end one to two days out.
            start_time: base - Duration::seconds((id * 4_231) % DAY_SECS),
            end_time: base + Duration::seconds(DAY_SECS + (id * 6_007) % DAY_SECS),
            advertised_start_time: advertised_start(base, id),
        })
        .collect()
}
