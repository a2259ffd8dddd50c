//! Unified error codes for the host stand
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Party errors
//! - 2xxx: Table errors
//! - 3xxx: Waitlist errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization
/// and so that a harness in any language can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Command was already processed
    DuplicateCommand = 9,

    // ==================== 1xxx: Party ====================
    /// Party not found at any table or on the waitlist
    PartyNotFound = 1001,
    /// Party id is empty
    PartyIdEmpty = 1002,
    /// Party size is below one
    PartySizeInvalid = 1003,
    /// Party is larger than the largest table
    PartyTooLarge = 1004,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table is occupied
    TableOccupied = 2002,
    /// Table is already empty
    TableAlreadyEmpty = 2003,
    /// Table is not ready for patrons
    TableNotReady = 2004,
    /// Party does not fit at the table
    TableTooSmall = 2005,
    /// Status change would cross the occupied/unoccupied boundary
    StatusCrossesOccupancy = 2006,
    /// Table label is empty
    TableLabelEmpty = 2101,
    /// Table label already used in this restaurant
    TableLabelExists = 2102,
    /// Table capacity is below one
    TableCapacityInvalid = 2103,
    /// Restaurant has no tables
    NoTables = 2104,

    // ==================== 3xxx: Waitlist ====================
    /// Waitlist is empty
    WaitlistEmpty = 3001,
    /// No waiting party fits at the table
    NoSeatableParty = 3002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// Internal state disagrees with a check that just passed
    StateInconsistent = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::DuplicateCommand => "Command has already been processed",

            // Party
            ErrorCode::PartyNotFound => "Party not found",
            ErrorCode::PartyIdEmpty => "Party must have a name",
            ErrorCode::PartySizeInvalid => "There must be at least one person in the party",
            ErrorCode::PartyTooLarge => "Party is larger than any table",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableAlreadyEmpty => "Table is already empty",
            ErrorCode::TableNotReady => "Table is not ready for patrons",
            ErrorCode::TableTooSmall => "Party does not fit at this table",
            ErrorCode::StatusCrossesOccupancy => {
                "Use seat or vacate to change whether a table is occupied"
            }
            ErrorCode::TableLabelEmpty => "Table must have a label",
            ErrorCode::TableLabelExists => "Table label already exists",
            ErrorCode::TableCapacityInvalid => "Table must be able to seat at least one person",
            ErrorCode::NoTables => "Restaurant must have at least one table",

            // Waitlist
            ErrorCode::WaitlistEmpty => "There are no waiting patrons",
            ErrorCode::NoSeatableParty => "No waiting party fits at this table",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StateInconsistent => "Seating state is inconsistent",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::DuplicateCommand),

            // Party
            1001 => Ok(ErrorCode::PartyNotFound),
            1002 => Ok(ErrorCode::PartyIdEmpty),
            1003 => Ok(ErrorCode::PartySizeInvalid),
            1004 => Ok(ErrorCode::PartyTooLarge),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableOccupied),
            2003 => Ok(ErrorCode::TableAlreadyEmpty),
            2004 => Ok(ErrorCode::TableNotReady),
            2005 => Ok(ErrorCode::TableTooSmall),
            2006 => Ok(ErrorCode::StatusCrossesOccupancy),
            2101 => Ok(ErrorCode::TableLabelEmpty),
            2102 => Ok(ErrorCode::TableLabelExists),
            2103 => Ok(ErrorCode::TableCapacityInvalid),
            2104 => Ok(ErrorCode::NoTables),

            // Waitlist
            3001 => Ok(ErrorCode::WaitlistEmpty),
            3002 => Ok(ErrorCode::NoSeatableParty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::StateInconsistent),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
