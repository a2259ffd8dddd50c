//! Shared types for the host stand
//!
//! Common types used across crates including the party and table status
//! models, the unified error system and the seating command protocol.

pub mod error;
pub mod models;
pub mod seating;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{OccupancyClass, Party, TableStatus};
pub use seating::{CommandOutcome, CommandResponse, SeatingCommand, SeatingCommandPayload};
