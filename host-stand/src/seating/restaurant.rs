//! Restaurant - the fixed table set and the waitlist

use super::error::{SeatingError, SeatingResult};
use super::table::Table;
use super::waitlist::Waitlist;
use shared::error::{AppError, ErrorCode};
use shared::seating::{
    PatronLocation, PatronRecord, RestaurantSummary, TableSnapshot, WaitlistSnapshot,
};
use shared::util::names_match;
use shared::Party;

/// Seats per table when no capacities are given
pub const DEFAULT_TABLE_CAPACITY: u32 = 4;

/// Name used when a blank name is given
pub const DEFAULT_RESTAURANT_NAME: &str = "Restaurant";

/// 餐厅：桌台 + 候位队列
#[derive(Debug, Clone)]
pub struct Restaurant {
    name: String,
    tables: Vec<Table>,
    waitlist: Waitlist,
}

impl Restaurant {
    /// Build a restaurant of `table_count` tables labelled `"1"..="n"`.
    ///
    /// An empty `capacities` gives every table [`DEFAULT_TABLE_CAPACITY`]
    /// seats; otherwise it must hold one capacity per table.
    pub fn create(name: &str, table_count: usize, capacities: &[u32]) -> SeatingResult<Self> {
        if capacities.is_empty() {
            return Self::with_uniform_tables(name, table_count, DEFAULT_TABLE_CAPACITY);
        }
        if capacities.len() != table_count {
            return Err(AppError::with_message(
                ErrorCode::InvalidRequest,
                format!(
                    "{} table capacities given for {} tables",
                    capacities.len(),
                    table_count
                ),
            )
            .into());
        }
        Self::new(name, capacities)
    }

    /// One table per capacity, labelled by position starting at `"1"`
    pub fn new(name: &str, capacities: &[u32]) -> SeatingResult<Self> {
        let tables = capacities
            .iter()
            .enumerate()
            .map(|(i, &capacity)| Table::new((i + 1).to_string(), capacity))
            .collect::<SeatingResult<Vec<_>>>()?;
        Self::from_tables(name, tables)
    }

    /// `table_count` tables of `capacity` seats each
    pub fn with_uniform_tables(
        name: &str,
        table_count: usize,
        capacity: u32,
    ) -> SeatingResult<Self> {
        Self::new(name, &vec![capacity; table_count])
    }

    /// Build from already labelled tables; labels must be unique ignoring case
    pub fn from_tables(name: &str, tables: Vec<Table>) -> SeatingResult<Self> {
        if tables.is_empty() {
            return Err(AppError::new(ErrorCode::NoTables).into());
        }
        for (i, table) in tables.iter().enumerate() {
            if tables[..i]
                .iter()
                .any(|other| names_match(other.label(), table.label()))
            {
                return Err(AppError::new(ErrorCode::TableLabelExists)
                    .with_detail("label", table.label())
                    .into());
            }
        }

        let name = name.trim();
        Ok(Self {
            name: if name.is_empty() {
                DEFAULT_RESTAURANT_NAME.to_string()
            } else {
                name.to_string()
            },
            tables,
            waitlist: Waitlist::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All tables in creation order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn waitlist(&self) -> &Waitlist {
        &self.waitlist
    }

    pub fn waitlist_mut(&mut self) -> &mut Waitlist {
        &mut self.waitlist
    }

    /// Table by label, ignoring case
    pub fn table(&self, label: &str) -> SeatingResult<&Table> {
        self.tables
            .iter()
            .find(|t| names_match(t.label(), label))
            .ok_or_else(|| SeatingError::TableNotFound(label.trim().to_string()))
    }

    pub fn table_mut(&mut self, label: &str) -> SeatingResult<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| names_match(t.label(), label))
            .ok_or_else(|| SeatingError::TableNotFound(label.trim().to_string()))
    }

    /// Tables with no occupant and at least `party_size` seats, in creation order.
    ///
    /// A vacated table is listed; it still has to be reset before anyone
    /// can sit there.
    pub fn available_tables(&self, party_size: u32) -> Vec<&Table> {
        self.tables
            .iter()
            .filter(|t| !t.is_occupied() && t.fits(party_size))
            .collect()
    }

    /// Seats at the largest table
    pub fn max_capacity(&self) -> u32 {
        self.tables.iter().map(Table::capacity).max().unwrap_or(0)
    }

    pub fn tables_in_use(&self) -> usize {
        self.tables.iter().filter(|t| t.is_occupied()).count()
    }

    pub fn tables_empty(&self) -> usize {
        self.tables.len() - self.tables_in_use()
    }

    /// Table whose occupant id matches, ignoring case
    pub fn find_seated(&self, party_id: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.occupant().is_some_and(|p| p.matches_id(party_id)))
    }

    /// Where a patron is: seated patrons are found before waiting ones
    pub fn locate_patron(&self, party_id: &str) -> Option<PatronRecord> {
        if let Some(table) = self.find_seated(party_id) {
            let party = table.occupant()?.clone();
            return Some(PatronRecord {
                party,
                location: PatronLocation::Seated {
                    table_label: table.label().to_string(),
                },
            });
        }
        let position = self.waitlist.position(party_id)?;
        let party = self.waitlist.find(party_id)?.clone();
        Some(PatronRecord {
            party,
            location: PatronLocation::Waiting { position },
        })
    }

    /// Every seated and waiting patron; tables first, then the waitlist
    pub fn patrons(&self) -> Vec<PatronRecord> {
        let seated = self.tables.iter().filter_map(|t| {
            t.occupant().map(|p| PatronRecord {
                party: p.clone(),
                location: PatronLocation::Seated {
                    table_label: t.label().to_string(),
                },
            })
        });
        let waiting = self.waitlist.iter().enumerate().map(|(i, p)| PatronRecord {
            party: p.clone(),
            location: PatronLocation::Waiting { position: i + 1 },
        });
        seated.chain(waiting).collect()
    }

    pub fn summary(&self) -> RestaurantSummary {
        let tables_in_use = self.tables_in_use();
        RestaurantSummary {
            name: self.name.clone(),
            table_count: self.tables.len(),
            tables_in_use,
            tables_empty: self.tables.len() - tables_in_use,
            parties_waiting: self.waitlist.len(),
            parties_waiting_with_reservation: self.waitlist.reservation_count(),
        }
    }

    pub fn table_snapshots(&self) -> Vec<TableSnapshot> {
        self.tables.iter().map(Table::snapshot).collect()
    }

    pub fn waitlist_snapshot(&self) -> WaitlistSnapshot {
        self.waitlist.snapshot()
    }

    /// All seated parties, in table order
    pub fn seated(&self) -> impl Iterator<Item = &Party> {
        self.tables.iter().filter_map(Table::occupant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TableStatus;

    fn labels(tables: &[&Table]) -> Vec<String> {
        tables.iter().map(|t| t.label().to_string()).collect()
    }

    #[test]
    fn test_create_uniform() {
        let restaurant = Restaurant::create("Chez Nous", 3, &[]).unwrap();
        assert_eq!(restaurant.name(), "Chez Nous");
        assert_eq!(restaurant.tables().len(), 3);
        assert!(
            restaurant
                .tables()
                .iter()
                .all(|t| t.capacity() == DEFAULT_TABLE_CAPACITY)
        );
        assert_eq!(restaurant.tables()[2].label(), "3");
    }

    #[test]
    fn test_create_with_capacities() {
        let restaurant = Restaurant::create("Bistro", 2, &[2, 6]).unwrap();
        assert_eq!(restaurant.table("1").unwrap().capacity(), 2);
        assert_eq!(restaurant.table("2").unwrap().capacity(), 6);
        assert_eq!(restaurant.max_capacity(), 6);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let err = Restaurant::create("Bistro", 3, &[2, 6]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);

        let err = Restaurant::create("Bistro", 0, &[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoTables);

        let err = Restaurant::create("Bistro", 2, &[2, 0]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableCapacityInvalid);
    }

    #[test]
    fn test_with_uniform_tables() {
        let restaurant = Restaurant::with_uniform_tables("Diner", 2, 6).unwrap();
        assert!(restaurant.tables().iter().all(|t| t.capacity() == 6));
        assert_eq!(restaurant.tables_empty(), 2);
    }

    #[test]
    fn test_blank_name_defaults() {
        let restaurant = Restaurant::create("   ", 1, &[]).unwrap();
        assert_eq!(restaurant.name(), DEFAULT_RESTAURANT_NAME);
    }

    #[test]
    fn test_from_tables_rejects_duplicate_labels() {
        let tables = vec![Table::new("Patio", 2).unwrap(), Table::new("patio", 4).unwrap()];
        let err = Restaurant::from_tables("Bistro", tables).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableLabelExists);
    }

    #[test]
    fn test_table_lookup_ignores_case() {
        let tables = vec![Table::new("Patio", 2).unwrap(), Table::new("Bar", 4).unwrap()];
        let restaurant = Restaurant::from_tables("Bistro", tables).unwrap();
        assert_eq!(restaurant.table("pATIO").unwrap().capacity(), 2);
        let err = restaurant.table("Window").unwrap_err();
        assert_eq!(err.code(), ErrorCode::TableNotFound);
    }

    #[test]
    fn test_available_tables_filters_and_keeps_order() {
        let mut restaurant = Restaurant::new("Bistro", &[2, 4, 6, 4]).unwrap();
        assert_eq!(labels(&restaurant.available_tables(3)), vec!["2", "3", "4"]);
        assert_eq!(labels(&restaurant.available_tables(1)).len(), 4);
        assert!(restaurant.available_tables(7).is_empty());

        restaurant
            .table_mut("2")
            .unwrap()
            .seat(Party::walk_in("Ana", 3).unwrap())
            .unwrap();
        assert_eq!(labels(&restaurant.available_tables(3)), vec!["3", "4"]);
    }

    #[test]
    fn test_available_tables_lists_vacated() {
        let mut restaurant = Restaurant::new("Bistro", &[4]).unwrap();
        let table = restaurant.table_mut("1").unwrap();
        table.seat(Party::walk_in("Ana", 3).unwrap()).unwrap();
        table.vacate().unwrap();

        let available = restaurant.available_tables(2);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].status(), TableStatus::Vacated);
    }

    #[test]
    fn test_locate_patron() {
        let mut restaurant = Restaurant::new("Bistro", &[4]).unwrap();
        restaurant
            .table_mut("1")
            .unwrap()
            .seat(Party::walk_in("Ana", 2).unwrap())
            .unwrap();
        restaurant.waitlist_mut().add(Party::walk_in("Bo", 2).unwrap());
        restaurant.waitlist_mut().add(Party::reserved("Cy", 2).unwrap());

        let ana = restaurant.locate_patron("ANA").unwrap();
        assert_eq!(
            ana.location,
            PatronLocation::Seated {
                table_label: "1".to_string()
            }
        );
        let bo = restaurant.locate_patron("bo").unwrap();
        assert_eq!(bo.location, PatronLocation::Waiting { position: 2 });
        assert!(restaurant.locate_patron("Dee").is_none());

        let patrons = restaurant.patrons();
        let ids: Vec<_> = patrons.iter().map(|p| p.party.id()).collect();
        assert_eq!(ids, vec!["Ana", "Cy", "Bo"]);
    }

    #[test]
    fn test_summary() {
        let mut restaurant = Restaurant::new("Bistro", &[2, 4]).unwrap();
        restaurant
            .table_mut("2")
            .unwrap()
            .seat(Party::walk_in("Ana", 3).unwrap())
            .unwrap();
        restaurant.waitlist_mut().add(Party::reserved("Bo", 4).unwrap());
        restaurant.waitlist_mut().add(Party::walk_in("Cy", 4).unwrap());

        let summary = restaurant.summary();
        assert_eq!(summary.name, "Bistro");
        assert_eq!(summary.table_count, 2);
        assert_eq!(summary.tables_in_use, 1);
        assert_eq!(summary.tables_empty, 1);
        assert_eq!(summary.parties_waiting, 2);
        assert_eq!(summary.parties_waiting_with_reservation, 1);
        assert_eq!(summary.total_patrons(), 3);
        assert_eq!(restaurant.seated().count(), 1);
    }
}
