//! Response envelopes for the catalog endpoints.
//!
//! Each catalog wraps its payload under a named key (`races`, `race`,
//! `events`) rather than a generic `data` field.

use paddock_db::models::event::Event;
use paddock_db::models::race::Race;
use serde::Serialize;

/// `{ "races": [...] }`
#[derive(Debug, Serialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

/// `{ "race": {...} }`, or `{ "race": null }` for an unknown id.
#[derive(Debug, Serialize)]
pub struct GetRaceResponse {
    pub race: Option<Race>,
}

/// `{ "events": [...] }`
#[derive(Debug, Serialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}
