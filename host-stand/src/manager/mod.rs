//! SeatingManager - command processing for the host stand
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Dispatch payload to the seating core
//!     ├─ 3. Mark command processed (success only, last
//!     │     PROCESSED_HISTORY_LIMIT ids are remembered)
//!     └─ 4. Return response
//! ```
//!
//! A failed command leaves the restaurant unchanged and can be retried with
//! the same id.

mod service;

pub use service::SeatingService;

use crate::core::Config;
use crate::seating::{Arrival, Restaurant, SeatingError, SeatingOffer, SeatingResult};
use shared::seating::{
    CommandOutcome, CommandResponse, PatronRecord, RestaurantSummary, SeatingCommand,
    SeatingCommandPayload, TableSnapshot, WaitlistSnapshot,
};
use shared::{Party, TableStatus};
use std::collections::{HashSet, VecDeque};

/// How many applied command ids are kept for duplicate detection
pub const PROCESSED_HISTORY_LIMIT: usize = 1024;

/// Fixed-size window of applied command ids, oldest evicted first
#[derive(Debug)]
struct ProcessedCommands {
    ids: HashSet<String>,
    order: VecDeque<String>,
    limit: usize,
}

impl ProcessedCommands {
    fn new(limit: usize) -> Self {
        Self {
            ids: HashSet::new(),
            order: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn insert(&mut self, id: String) {
        if !self.ids.insert(id.clone()) {
            return;
        }
        self.order.push_back(id);
        while self.order.len() > self.limit {
            if let Some(oldest) = self.order.pop_front() {
                self.ids.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Owns the restaurant and applies seating commands to it
#[derive(Debug)]
pub struct SeatingManager {
    restaurant: Restaurant,
    /// Ids of recently applied commands
    processed: ProcessedCommands,
}

impl SeatingManager {
    pub fn new(restaurant: Restaurant) -> Self {
        Self::with_history_limit(restaurant, PROCESSED_HISTORY_LIMIT)
    }

    /// Like [`SeatingManager::new`], remembering at most `limit` command ids
    pub fn with_history_limit(restaurant: Restaurant, limit: usize) -> Self {
        tracing::info!(
            restaurant = %restaurant.name(),
            tables = restaurant.tables().len(),
            "SeatingManager started"
        );
        Self {
            restaurant,
            processed: ProcessedCommands::new(limit),
        }
    }

    /// Build the restaurant described by `config`
    pub fn from_config(config: &Config) -> SeatingResult<Self> {
        let capacities = config.capacities()?;
        let restaurant = Restaurant::new(&config.restaurant_name, &capacities)?;
        Ok(Self::new(restaurant))
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Execute a command and return the response
    pub fn execute_command(&mut self, cmd: SeatingCommand) -> CommandResponse {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        if self.processed.contains(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return CommandResponse::duplicate(cmd.command_id);
        }

        let name = cmd.payload.name();
        match self.process_payload(cmd.payload) {
            Ok(outcome) => {
                tracing::info!(command_id = %cmd.command_id, command = name, outcome = ?outcome, "Command applied");
                self.processed.insert(cmd.command_id.clone());
                CommandResponse::success(cmd.command_id, outcome)
            }
            Err(err) => {
                tracing::warn!(command_id = %cmd.command_id, command = name, error = %err, "Command rejected");
                CommandResponse::error(cmd.command_id, err.into())
            }
        }
    }

    fn process_payload(&mut self, payload: SeatingCommandPayload) -> SeatingResult<CommandOutcome> {
        match payload {
            SeatingCommandPayload::Arrive {
                party_id,
                party_size,
                has_reservation,
                table_label,
            } => {
                let party = Party::new(party_id, party_size, has_reservation)?;
                let record = party.clone();
                match self.restaurant.on_arrival(party, table_label.as_deref())? {
                    Arrival::Seated { table_label } => Ok(CommandOutcome::Seated {
                        party: record,
                        table_label,
                    }),
                    Arrival::Waitlisted { position } => Ok(CommandOutcome::Waitlisted {
                        party: record,
                        position,
                    }),
                }
            }
            SeatingCommandPayload::SeatFromWaitlist {
                table_label,
                party_id,
            } => {
                let table = self.restaurant.table(&table_label)?;
                let label = table.label().to_string();
                let capacity = table.capacity();
                match self.restaurant.on_table_freed(&label, party_id.as_deref())? {
                    Some(party) => Ok(CommandOutcome::Seated {
                        party,
                        table_label: label,
                    }),
                    None => Err(SeatingError::NoSeatableParty { label, capacity }),
                }
            }
            SeatingCommandPayload::SetTableStatus {
                table_label,
                status,
            } => self.change_status(&table_label, status),
            SeatingCommandPayload::AdvanceTable { table_label } => {
                let table = self.restaurant.table(&table_label)?;
                let label = table.label().to_string();
                let from = table.status();
                let to = from.next();
                match (from.is_occupied(), to.is_occupied()) {
                    // CHECK_DELIVERED → VACATED: the party leaves
                    (true, false) => self.vacate(&label),
                    // READY → AWAITING_ORDER needs a party
                    (false, true) => Err(SeatingError::CrossesOccupancy { label, from, to }),
                    _ => self.change_status(&label, to),
                }
            }
            SeatingCommandPayload::VacateTable { table_label } => self.vacate(&table_label),
            SeatingCommandPayload::ResetTable { table_label } => {
                self.change_status(&table_label, TableStatus::Ready)
            }
            SeatingCommandPayload::RemoveParty { party_id } => self.remove_party(&party_id),
        }
    }

    fn change_status(&mut self, label: &str, status: TableStatus) -> SeatingResult<CommandOutcome> {
        let table = self.restaurant.table_mut(label)?;
        table.set_status(status)?;
        let table_label = table.label().to_string();

        let next_candidate = if status == TableStatus::Ready {
            self.restaurant
                .seating_offer(&table_label)
                .ok()
                .and_then(|offer| offer.front().cloned())
        } else {
            None
        };
        Ok(CommandOutcome::StatusChanged {
            table_label,
            status,
            next_candidate,
        })
    }

    fn vacate(&mut self, label: &str) -> SeatingResult<CommandOutcome> {
        let table = self.restaurant.table_mut(label)?;
        let party = table.vacate()?;
        Ok(CommandOutcome::Vacated {
            table_label: table.label().to_string(),
            party,
        })
    }

    /// Waiting patrons are dropped from the waitlist; seated ones vacate their table
    fn remove_party(&mut self, party_id: &str) -> SeatingResult<CommandOutcome> {
        if let Some(party) = self.restaurant.waitlist_mut().remove(party_id) {
            return Ok(CommandOutcome::PartyRemoved {
                party,
                table_label: None,
            });
        }
        let label = self
            .restaurant
            .find_seated(party_id)
            .map(|t| t.label().to_string())
            .ok_or_else(|| SeatingError::PartyNotFound(party_id.trim().to_string()))?;
        let party = self.restaurant.table_mut(&label)?.vacate()?;
        Ok(CommandOutcome::PartyRemoved {
            party,
            table_label: Some(label),
        })
    }

    // ========== Queries ==========

    pub fn table_snapshots(&self) -> Vec<TableSnapshot> {
        self.restaurant.table_snapshots()
    }

    pub fn table_snapshot(&self, label: &str) -> SeatingResult<TableSnapshot> {
        self.restaurant.table(label).map(|t| t.snapshot())
    }

    pub fn waitlist_snapshot(&self) -> WaitlistSnapshot {
        self.restaurant.waitlist_snapshot()
    }

    pub fn locate_patron(&self, party_id: &str) -> Option<PatronRecord> {
        self.restaurant.locate_patron(party_id)
    }

    pub fn patrons(&self) -> Vec<PatronRecord> {
        self.restaurant.patrons()
    }

    /// Free tables a party of `party_size` fits at, in table order
    pub fn available_tables(&self, party_size: u32) -> Vec<TableSnapshot> {
        self.restaurant
            .available_tables(party_size)
            .into_iter()
            .map(|t| t.snapshot())
            .collect()
    }

    pub fn seating_offer(&self, label: &str) -> SeatingResult<SeatingOffer> {
        self.restaurant.seating_offer(label)
    }

    pub fn summary(&self) -> RestaurantSummary {
        self.restaurant.summary()
    }

    /// Number of applied command ids still remembered
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }
}

#[cfg(test)]
mod tests;
