use shared::error::{AppError, ErrorCode};
use shared::seating::CommandError;
use shared::{Party, TableStatus};
use thiserror::Error;

/// Seating errors
///
/// Expected conditions (table full, party too big, unknown id) are all
/// recoverable; the caller picks another action.
#[derive(Debug, Clone, Error)]
pub enum SeatingError {
    #[error("{0}")]
    Validation(#[from] AppError),

    #[error("Table {0} was not found")]
    TableNotFound(String),

    #[error("{0} was not found")]
    PartyNotFound(String),

    #[error("Table {label} is occupied by {occupant}")]
    TableOccupied { label: String, occupant: String },

    #[error("Table {label} is not ready for patrons ({status})")]
    TableNotReady { label: String, status: TableStatus },

    #[error("{party} does not fit at Table {label} ({capacity} seats)")]
    TableTooSmall {
        label: String,
        capacity: u32,
        party: String,
    },

    #[error("Table {0} is already empty")]
    TableAlreadyEmpty(String),

    #[error("Table {label} cannot go from \"{from}\" to \"{to}\"; use seat or vacate instead")]
    CrossesOccupancy {
        label: String,
        from: TableStatus,
        to: TableStatus,
    },

    #[error("A party of {size} is larger than the largest table ({max_capacity} seats)")]
    PartyTooLarge { size: u32, max_capacity: u32 },

    #[error("No waiting party fits at Table {label} ({capacity} seats)")]
    NoSeatableParty { label: String, capacity: u32 },

    #[error("Inconsistent seating state: {0}")]
    Inconsistent(String),
}

impl SeatingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatingError::Validation(e) => e.code,
            SeatingError::TableNotFound(_) => ErrorCode::TableNotFound,
            SeatingError::PartyNotFound(_) => ErrorCode::PartyNotFound,
            SeatingError::TableOccupied { .. } => ErrorCode::TableOccupied,
            SeatingError::TableNotReady { .. } => ErrorCode::TableNotReady,
            SeatingError::TableTooSmall { .. } => ErrorCode::TableTooSmall,
            SeatingError::TableAlreadyEmpty(_) => ErrorCode::TableAlreadyEmpty,
            SeatingError::CrossesOccupancy { .. } => ErrorCode::StatusCrossesOccupancy,
            SeatingError::PartyTooLarge { .. } => ErrorCode::PartyTooLarge,
            SeatingError::NoSeatableParty { .. } => ErrorCode::NoSeatableParty,
            SeatingError::Inconsistent(_) => ErrorCode::StateInconsistent,
        }
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        match err {
            SeatingError::Validation(e) => e,
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}

impl From<SeatingError> for CommandError {
    fn from(err: SeatingError) -> Self {
        if let SeatingError::Inconsistent(ref msg) = err {
            tracing::error!(error = %msg, "Seating state inconsistency");
        }
        CommandError::new(err.code(), err.to_string())
    }
}

/// A seat attempt that failed; the party is handed back to the caller
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct SeatRejected {
    pub party: Party,
    #[source]
    pub error: SeatingError,
}

impl SeatRejected {
    pub fn new(party: Party, error: SeatingError) -> Self {
        Self { party, error }
    }

    pub fn into_parts(self) -> (Party, SeatingError) {
        (self.party, self.error)
    }
}

impl From<SeatRejected> for SeatingError {
    fn from(rejected: SeatRejected) -> Self {
        rejected.error
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
