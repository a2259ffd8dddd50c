//! Seating protocol
//!
//! This module provides the types a harness exchanges with the host stand:
//! - Commands: Requests that change who sits where
//! - Responses: Outcome or error of each command
//! - Snapshots: Read-only views of tables, the waitlist and patrons

pub mod command;
pub mod types;

// Re-exports
pub use command::{SeatingCommand, SeatingCommandPayload};
pub use types::*;
