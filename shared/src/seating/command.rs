//! Seating commands
//!
//! Requests a harness sends to the host stand. Every command carries a
//! unique id so that a retried command is acknowledged instead of replayed.

use crate::models::TableStatus;
use serde::{Deserialize, Serialize};

/// Seating command envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatingCommand {
    /// Unique command id (for idempotency)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command payload
    pub payload: SeatingCommandPayload,
}

impl SeatingCommand {
    pub fn new(payload: SeatingCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatingCommandPayload {
    /// A party walks in. It is seated at `table_label` if given, otherwise
    /// at the first ready table that fits; with no table free it joins the
    /// waitlist.
    Arrive {
        party_id: String,
        party_size: u32,
        #[serde(default)]
        has_reservation: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table_label: Option<String>,
    },
    /// Seat a waiting party at a ready table. Without `party_id` the
    /// longest-waiting party that fits is chosen.
    SeatFromWaitlist {
        table_label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        party_id: Option<String>,
    },
    /// Set a status within the table's current occupancy class
    SetTableStatus {
        table_label: String,
        status: TableStatus,
    },
    /// Move the table one step along the service cycle
    AdvanceTable { table_label: String },
    /// The seated party leaves
    VacateTable { table_label: String },
    /// A vacated table has been cleared and is ready again
    ResetTable { table_label: String },
    /// Remove a patron, waiting or seated
    RemoveParty { party_id: String },
}

impl SeatingCommandPayload {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arrive { .. } => "Arrive",
            Self::SeatFromWaitlist { .. } => "SeatFromWaitlist",
            Self::SetTableStatus { .. } => "SetTableStatus",
            Self::AdvanceTable { .. } => "AdvanceTable",
            Self::VacateTable { .. } => "VacateTable",
            Self::ResetTable { .. } => "ResetTable",
            Self::RemoveParty { .. } => "RemoveParty",
        }
    }
}
