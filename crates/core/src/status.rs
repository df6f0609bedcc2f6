//! Read-time status derivation.
//!
//! Status is never persisted. It is recomputed on every read by comparing a
//! record's advertised start time against a single `now` for the whole
//! response.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Open,
    Closed,
}

impl RecordStatus {
    /// `Closed` once the advertised start is at or before `now`.
    pub fn derive(advertised_start_time: Timestamp, now: Timestamp) -> Self {
        if advertised_start_time <= now {
            Self::Closed
        } else {
            Self::Open
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
