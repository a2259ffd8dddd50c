//! Party Model

use crate::error::{AppError, AppResult, ErrorCode};
use crate::util::names_match;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of one or more patrons (客人/一桌客)
///
/// The id is the party's name or any other identifier unique to it (a pager
/// number, for instance). A `Party` is immutable once built and can only be
/// built through [`Party::new`], so `size >= 1` and a non-empty id always hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PartyRecord", into = "PartyRecord")]
pub struct Party {
    id: String,
    size: u32,
    has_reservation: bool,
}

/// Unvalidated wire form of a [`Party`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PartyRecord {
    id: String,
    size: u32,
    #[serde(default)]
    has_reservation: bool,
}

impl Party {
    /// Create a party, rejecting an empty id or a size below one
    pub fn new(id: impl Into<String>, size: u32, has_reservation: bool) -> AppResult<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(AppError::new(ErrorCode::PartyIdEmpty));
        }
        if size < 1 {
            return Err(AppError::new(ErrorCode::PartySizeInvalid).with_detail("size", size));
        }
        Ok(Self {
            id,
            size,
            has_reservation,
        })
    }

    /// Create a party without a reservation
    pub fn walk_in(id: impl Into<String>, size: u32) -> AppResult<Self> {
        Self::new(id, size, false)
    }

    /// Create a party holding a reservation
    pub fn reserved(id: impl Into<String>, size: u32) -> AppResult<Self> {
        Self::new(id, size, true)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn has_reservation(&self) -> bool {
        self.has_reservation
    }

    /// Case-insensitive id comparison
    pub fn matches_id(&self, id: &str) -> bool {
        names_match(&self.id, id)
    }

    /// Whether this party fits at a table with `capacity` seats
    pub fn fits(&self, capacity: u32) -> bool {
        self.size <= capacity
    }
}

impl TryFrom<PartyRecord> for Party {
    type Error = AppError;

    fn try_from(record: PartyRecord) -> Result<Self, Self::Error> {
        Party::new(record.id, record.size, record.has_reservation)
    }
}

impl From<Party> for PartyRecord {
    fn from(party: Party) -> Self {
        Self {
            id: party.id,
            size: party.size,
            has_reservation: party.has_reservation,
        }
    }
}

/// `Curtis (R, party of 4)`; the `R, ` marker only appears with a reservation
impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}party of {})",
            self.id,
            if self.has_reservation { "R, " } else { "" },
            self.size
        )
    }
}
