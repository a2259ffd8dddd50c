//! Plain-text rendering of seating state

use shared::seating::{
    CommandOutcome, PatronLocation, PatronRecord, RestaurantSummary, TableSnapshot,
    WaitlistSnapshot,
};
use shared::TableStatus;
use std::fmt::Write;

pub const NO_WAITING_PATRONS: &str = "There are no waiting patrons.";

/// `Table 3 (4 seats):\tServed\t\tCurtis (R, party of 4)`
pub fn table_line(table: &TableSnapshot) -> String {
    let mut line = format!(
        "Table {} ({} seats):\t{}",
        table.label, table.capacity, table.status
    );
    if let Some(occupant) = &table.occupant {
        // pad the short labels so occupants line up
        if matches!(table.status, TableStatus::Served | TableStatus::CheckDelivered) {
            line.push_str("\t\t");
        }
        let _ = write!(line, "\t{}", occupant);
    }
    line
}

/// Waiting parties front to back, one per line
pub fn waitlist_lines(waitlist: &WaitlistSnapshot) -> String {
    if waitlist.is_empty() {
        return NO_WAITING_PATRONS.to_string();
    }
    waitlist
        .entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tables(summary: &RestaurantSummary, tables: &[TableSnapshot]) -> String {
    let mut out = if summary.table_count == 1 {
        format!("There is 1 table in {}", summary.name)
    } else {
        format!(
            "There are {} tables in {}",
            summary.table_count, summary.name
        )
    };
    let _ = writeln!(
        out,
        " ({} in use and {} empty).\n",
        summary.tables_in_use, summary.tables_empty
    );
    out.push_str(
        &tables
            .iter()
            .map(table_line)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    out
}

pub fn waitlist(waitlist: &WaitlistSnapshot) -> String {
    let mut out = String::new();
    match waitlist.total {
        0 => {}
        1 => out.push_str("There is 1 person or party waiting to be seated.\n"),
        n => {
            let _ = writeln!(out, "There are {} people or parties waiting to be seated.", n);
        }
    }
    if !waitlist.is_empty() {
        let _ = writeln!(out, "Parties with a reservation:\t{}", waitlist.with_reservation);
        let _ = writeln!(
            out,
            "Parties without a reservation:\t{}\n",
            waitlist.without_reservation()
        );
    }
    out.push_str(&waitlist_lines(waitlist));
    out
}

pub fn patrons(records: &[PatronRecord], waiting: &WaitlistSnapshot) -> String {
    let mut out = String::from("\tSEATED:\n");
    let seated: Vec<_> = records
        .iter()
        .filter_map(|r| match &r.location {
            PatronLocation::Seated { table_label } => {
                Some(format!("{}\tSeated at Table {}", r.party, table_label))
            }
            PatronLocation::Waiting { .. } => None,
        })
        .collect();
    if seated.is_empty() {
        out.push_str("There are no seated patrons.");
    } else {
        out.push_str(&seated.join("\n"));
    }
    let _ = write!(
        out,
        "\n\n\tWAITING:\n{}\n\nTotal patrons: {}",
        waitlist_lines(waiting),
        records.len()
    );
    out
}

pub fn stats(summary: &RestaurantSummary) -> String {
    format!(
        "{}\nTables in use:\t{}\nTables empty:\t{}\nWaiting:\t{} ({} with a reservation)\nTotal patrons:\t{}",
        summary.name.to_uppercase(),
        summary.tables_in_use,
        summary.tables_empty,
        summary.parties_waiting,
        summary.parties_waiting_with_reservation,
        summary.total_patrons()
    )
}

pub fn patron(record: Option<&PatronRecord>, name: &str) -> String {
    match record {
        Some(PatronRecord {
            party,
            location: PatronLocation::Seated { table_label },
        }) => format!("{} is seated at Table {}.", party, table_label),
        Some(PatronRecord {
            party,
            location: PatronLocation::Waiting { position },
        }) => format!(
            "{} is waiting for a table (position {}).",
            party, position
        ),
        None => format!("Patron named {} was not found.", name.trim()),
    }
}

pub fn available(party_size: u32, tables: &[TableSnapshot]) -> String {
    if tables.is_empty() {
        return format!("No tables are available for a party of {}.", party_size);
    }
    tables
        .iter()
        .map(table_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// What a successful command did. `waiting` is the waitlist length after it.
pub fn outcome(outcome: &CommandOutcome, waiting: usize) -> String {
    match outcome {
        CommandOutcome::Seated { party, table_label } => {
            format!("{} may be seated at Table {}.", party, table_label)
        }
        CommandOutcome::Waitlisted { party, position } => format!(
            "{} has been added to the waitlist (position {}).",
            party, position
        ),
        CommandOutcome::StatusChanged {
            table_label,
            status: TableStatus::Ready,
            next_candidate,
        } => match next_candidate {
            Some(party) => format!(
                "Table {} is now available for {}. Type \"seat {}\" to seat them.",
                table_label, party, table_label
            ),
            None if waiting == 0 => format!(
                "Table {} is now available. There are no patrons waiting to be seated.",
                table_label
            ),
            None => format!(
                "Table {} is now available. Any parties waiting to be seated are too large for this table.",
                table_label
            ),
        },
        CommandOutcome::StatusChanged {
            table_label,
            status,
            ..
        } => format!("Table {} is now \"{}\".", table_label, status),
        CommandOutcome::Vacated { table_label, party } => {
            format!("{} has left Table {}.", party, table_label)
        }
        CommandOutcome::PartyRemoved {
            party,
            table_label: Some(label),
        } => format!("{} has been removed from Table {}.", party, label),
        CommandOutcome::PartyRemoved {
            party,
            table_label: None,
        } => format!("{} has been removed from the waitlist.", party),
    }
}

pub fn help() -> &'static str {
    "Commands:
  arrive <size> <r|w> <name> [@table]  Add an incoming patron (r = reservation)
  seat <table> [name]                  Seat a waiting patron at a ready table
  status <table> <0-5|+>               Set a table's status, or \"+\" to advance
      0 Ready for patrons   1 Waiting to order   2 Waiting for food
      3 Served              4 Check delivered    5 Table vacated
  advance <table>                      Same as status <table> +
  vacate <table>                       The seated party leaves
  reset <table>                        A vacated table is ready again
  remove <name>                        Delete a patron, waiting or seated
  find <name>                          Show where a patron is
  available <size>                     Tables free for a party of that size
  tables | waitlist | patrons | stats  Views
  json                                 Dump state as JSON
  quit                                 Leave"
}
