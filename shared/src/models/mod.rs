//! Data models
//!
//! Value types shared between the seating core and any harness rendering it.

pub mod party;
pub mod table_status;

// Re-exports
pub use party::*;
pub use table_status::*;
