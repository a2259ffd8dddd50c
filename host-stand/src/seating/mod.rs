//! Seating core
//!
//! - [`Table`]: one seating slot and its service-stage state machine
//! - [`Waitlist`]: parties waiting for a table, reservations first
//! - [`Restaurant`]: the table set plus the waitlist
//! - assignment: arrival and table-freed decisions on [`Restaurant`]
//!
//! Everything here is synchronous and single-owner; see
//! [`crate::manager::SeatingService`] for shared access.

pub mod assignment;
pub mod error;
pub mod restaurant;
pub mod table;
pub mod waitlist;

pub use assignment::{Arrival, SeatingOffer};
pub use error::{SeatRejected, SeatingError, SeatingResult};
pub use restaurant::{DEFAULT_RESTAURANT_NAME, DEFAULT_TABLE_CAPACITY, Restaurant};
pub use table::Table;
pub use waitlist::Waitlist;
