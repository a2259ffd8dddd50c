//! Seating assignment - binds free tables to waiting parties
//!
//! Two moments drive seating:
//! - a party arrives: seat it at a free table that fits, or queue it
//! - a table becomes ready: offer it to the longest-waiting party that fits

use super::error::{SeatRejected, SeatingError, SeatingResult};
use super::restaurant::Restaurant;
use super::table::Table;
use super::waitlist::Waitlist;
use shared::Party;

/// Where an arriving party ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrival {
    Seated { table_label: String },
    /// 1-based waitlist position
    Waitlisted { position: usize },
}

/// Waiting parties that fit a ready table, best candidate first
#[derive(Debug, Clone)]
pub struct SeatingOffer {
    pub table_label: String,
    pub capacity: u32,
    pub candidates: Waitlist,
}

impl SeatingOffer {
    /// Longest-waiting party that fits, reservations first
    pub fn front(&self) -> Option<&Party> {
        self.candidates.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Restaurant {
    /// Seat an arriving party or put it on the waitlist.
    ///
    /// With `choice` the party is seated at that table or rejected. Without
    /// it the first ready table that fits is taken, and with none the party
    /// joins the waitlist. A party larger than every table is rejected
    /// because no table could ever be offered to it.
    pub fn on_arrival(
        &mut self,
        party: Party,
        choice: Option<&str>,
    ) -> Result<Arrival, SeatRejected> {
        let max_capacity = self.max_capacity();
        if !party.fits(max_capacity) {
            let error = SeatingError::PartyTooLarge {
                size: party.size(),
                max_capacity,
            };
            return Err(SeatRejected::new(party, error));
        }

        let label = match choice {
            Some(label) => label.to_string(),
            None => {
                let free = self
                    .tables()
                    .iter()
                    .find(|t| t.is_ready() && t.fits(party.size()));
                match free {
                    Some(table) => table.label().to_string(),
                    None => {
                        let position = self.waitlist_mut().add(party);
                        return Ok(Arrival::Waitlisted { position });
                    }
                }
            }
        };

        match self.table_mut(&label) {
            Ok(table) => {
                table.seat(party)?;
                Ok(Arrival::Seated {
                    table_label: table.label().to_string(),
                })
            }
            Err(error) => Err(SeatRejected::new(party, error)),
        }
    }

    /// Waiting parties that could sit at a ready table
    pub fn seating_offer(&self, label: &str) -> SeatingResult<SeatingOffer> {
        let table = self.table(label)?;
        ensure_ready(table)?;
        Ok(SeatingOffer {
            table_label: table.label().to_string(),
            capacity: table.capacity(),
            candidates: self.waitlist().seatable(table.capacity()),
        })
    }

    /// Seat a waiting party at a table that has just become ready.
    ///
    /// `pick` names the party to seat; without it the front of the seatable
    /// list is taken. Returns `Ok(None)` when nobody waiting fits.
    pub fn on_table_freed(
        &mut self,
        label: &str,
        pick: Option<&str>,
    ) -> SeatingResult<Option<Party>> {
        let table = self.table(label)?;
        ensure_ready(table)?;
        let table_label = table.label().to_string();
        let capacity = table.capacity();

        let index = self.waitlist().seatable_index(pick, capacity);
        let taken = index.and_then(|index| self.waitlist_mut().take_at(index));
        let (Some(index), Some(party)) = (index, taken) else {
            return match pick {
                Some(id) => Err(match self.waitlist().find(id) {
                    Some(waiting) => SeatingError::TableTooSmall {
                        label: table_label,
                        capacity,
                        party: waiting.to_string(),
                    },
                    None => SeatingError::PartyNotFound(id.trim().to_string()),
                }),
                None => Ok(None),
            };
        };

        self.seat_taken(&table_label, index, party).map(Some)
    }

    /// Seat a party just taken from waitlist `index`.
    ///
    /// On failure the party goes back to `index`, leaving the waitlist as it
    /// was before the take.
    fn seat_taken(&mut self, table_label: &str, index: usize, party: Party) -> SeatingResult<Party> {
        let seated = party.clone();
        let result = match self.table_mut(table_label) {
            Ok(table) => table.seat(party),
            Err(error) => Err(SeatRejected::new(party, error)),
        };
        if let Err(rejected) = result {
            let (party, error) = rejected.into_parts();
            tracing::error!(
                table = %table_label,
                party = %party,
                error = %error,
                "Seating a checked party failed; returning it to the waitlist"
            );
            self.waitlist_mut().restore(index, party);
            return Err(SeatingError::Inconsistent(format!(
                "table {} refused a party that fit: {}",
                table_label, error
            )));
        }
        Ok(seated)
    }
}

fn ensure_ready(table: &Table) -> SeatingResult<()> {
    if let Some(occupant) = table.occupant() {
        return Err(SeatingError::TableOccupied {
            label: table.label().to_string(),
            occupant: occupant.to_string(),
        });
    }
    if !table.is_ready() {
        return Err(SeatingError::TableNotReady {
            label: table.label().to_string(),
            status: table.status(),
        });
    }
    Ok(())
}
