//! Seating responses and read-only snapshots

use crate::error::{AppError, ErrorCode};
use crate::models::{Party, TableStatus};
use serde::{Deserialize, Serialize};

// ============================================================================
// Command Response
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// What changed (absent for failures and duplicates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CommandOutcome>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, outcome: CommandOutcome) -> Self {
        Self {
            command_id,
            success: true,
            outcome: Some(outcome),
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            outcome: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            outcome: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandError {
    pub code: ErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        Self::new(err.code, err.message)
    }
}

/// State change produced by a successful command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandOutcome {
    /// Party now occupies the table
    Seated { party: Party, table_label: String },
    /// Party joined the waitlist at a 1-based position
    Waitlisted { party: Party, position: usize },
    /// Status changed without a change of occupant. When the table has just
    /// become ready, `next_candidate` is the longest-waiting party that fits.
    StatusChanged {
        table_label: String,
        status: TableStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next_candidate: Option<Party>,
    },
    /// The seated party left the table
    Vacated { table_label: String, party: Party },
    /// Patron removed from the waitlist, or from a table when `table_label` is set
    PartyRemoved {
        party: Party,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table_label: Option<String>,
    },
}

// ============================================================================
// Snapshots
// ============================================================================

/// Read-only view of one table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSnapshot {
    pub label: String,
    pub capacity: u32,
    pub status: TableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant: Option<Party>,
}

impl TableSnapshot {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Read-only view of the waitlist, front first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WaitlistSnapshot {
    pub entries: Vec<Party>,
    pub total: usize,
    pub with_reservation: usize,
}

impl WaitlistSnapshot {
    /// Walk-in count; decoded snapshots may carry inconsistent counters
    pub fn without_reservation(&self) -> usize {
        self.total.saturating_sub(self.with_reservation)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Where a patron currently is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatronLocation {
    Seated { table_label: String },
    /// 1-based waitlist position
    Waiting { position: usize },
}

/// A patron and its location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatronRecord {
    pub party: Party,
    pub location: PatronLocation,
}

/// Occupancy statistics for the whole restaurant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantSummary {
    pub name: String,
    pub table_count: usize,
    pub tables_in_use: usize,
    pub tables_empty: usize,
    pub parties_waiting: usize,
    pub parties_waiting_with_reservation: usize,
}

impl RestaurantSummary {
    /// Seated plus waiting parties
    pub fn total_patrons(&self) -> usize {
        self.tables_in_use + self.parties_waiting
    }
}
