//! Table - one seating slot with a service-stage state machine
//!
//! Who sits at a table only changes through [`Table::seat`] and
//! [`Table::vacate`]. [`Table::set_status`] moves service progress within the
//! current occupancy class and never across it, so status and occupant can
//! not disagree.

use super::error::{SeatRejected, SeatingError, SeatingResult};
use shared::error::{AppError, ErrorCode};
use shared::seating::TableSnapshot;
use shared::{Party, TableStatus};

/// 桌台
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    label: String,
    capacity: u32,
    status: TableStatus,
    occupant: Option<Party>,
}

impl Table {
    /// Create an empty, ready table
    pub fn new(label: impl Into<String>, capacity: u32) -> SeatingResult<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(AppError::new(ErrorCode::TableLabelEmpty).into());
        }
        if capacity < 1 {
            return Err(AppError::new(ErrorCode::TableCapacityInvalid)
                .with_detail("label", label)
                .into());
        }
        Ok(Self {
            label,
            capacity,
            status: TableStatus::Ready,
            occupant: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn occupant(&self) -> Option<&Party> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Unoccupied and ready for patrons
    pub fn is_ready(&self) -> bool {
        self.occupant.is_none() && self.status == TableStatus::Ready
    }

    /// Whether a party of `party_size` fits at this table
    pub fn fits(&self, party_size: u32) -> bool {
        party_size <= self.capacity
    }

    /// Check every precondition of [`Table::seat`] without changing anything
    pub fn check_seat(&self, party: &Party) -> SeatingResult<()> {
        if let Some(occupant) = &self.occupant {
            return Err(SeatingError::TableOccupied {
                label: self.label.clone(),
                occupant: occupant.to_string(),
            });
        }
        if self.status != TableStatus::Ready {
            return Err(SeatingError::TableNotReady {
                label: self.label.clone(),
                status: self.status,
            });
        }
        if !party.fits(self.capacity) {
            return Err(SeatingError::TableTooSmall {
                label: self.label.clone(),
                capacity: self.capacity,
                party: party.to_string(),
            });
        }
        Ok(())
    }

    /// Seat a party at an empty, ready table it fits at.
    ///
    /// On success the table is `AwaitingOrder`. On failure nothing changes and
    /// the party comes back inside [`SeatRejected`].
    pub fn seat(&mut self, party: Party) -> Result<(), SeatRejected> {
        if let Err(error) = self.check_seat(&party) {
            return Err(SeatRejected::new(party, error));
        }
        self.occupant = Some(party);
        self.status = TableStatus::AwaitingOrder;
        self.debug_assert_consistent();
        Ok(())
    }

    /// Remove the occupant and mark the table `Vacated`, returning the party
    pub fn vacate(&mut self) -> SeatingResult<Party> {
        let party = self
            .occupant
            .take()
            .ok_or_else(|| SeatingError::TableAlreadyEmpty(self.label.clone()))?;
        self.status = TableStatus::Vacated;
        self.debug_assert_consistent();
        Ok(party)
    }

    /// Change the status within the current occupancy class.
    ///
    /// Setting the current status again is a no-op success.
    pub fn set_status(&mut self, status: TableStatus) -> SeatingResult<()> {
        if !self.status.same_class(status) {
            return Err(SeatingError::CrossesOccupancy {
                label: self.label.clone(),
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        self.debug_assert_consistent();
        Ok(())
    }

    /// `Vacated` → `Ready` once the table has been cleared
    pub fn reset(&mut self) -> SeatingResult<()> {
        self.set_status(TableStatus::Ready)
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            label: self.label.clone(),
            capacity: self.capacity,
            status: self.status,
            occupant: self.occupant.clone(),
        }
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        debug_assert_eq!(
            self.occupant.is_some(),
            self.status.is_occupied(),
            "table {} status {:?} disagrees with occupant",
            self.label,
            self.status
        );
    }
}
