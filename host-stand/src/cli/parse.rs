//! Line parser for the host stand prompt
//!
//! ```text
//! arrive <size> <r|w> <name...> [@table]
//! seat <table> [name...]
//! status <table> <0-5|+>
//! advance|vacate|reset <table>
//! remove|find <name...>
//! available <size>
//! tables | waitlist | patrons | stats | json | help | quit
//! ```

use shared::{SeatingCommandPayload, TableStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command \"{0}\"; type \"help\" for a list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("\"{0}\" is not a valid party size")]
    InvalidSize(String),

    #[error("Please enter \"+\" or a number between 0 and 5")]
    InvalidStatus,
}

/// One parsed prompt line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Changes seating; sent to the manager
    Seating(SeatingCommandPayload),
    Find(String),
    Available(u32),
    Tables,
    Waitlist,
    Patrons,
    Stats,
    Json,
    Help,
    Quit,
    Empty,
}

const ARRIVE_USAGE: &str = "arrive <size> <r|w> <name> [@table]";
const SEAT_USAGE: &str = "seat <table> [name]";
const STATUS_USAGE: &str = "status <table> <0-5|+>";

pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "arrive" | "add" => parse_arrive(rest)?,
        "seat" => {
            let (table_label, name) = split_first(rest).ok_or(ParseError::Usage(SEAT_USAGE))?;
            Command::Seating(SeatingCommandPayload::SeatFromWaitlist {
                table_label,
                party_id: (!name.is_empty()).then_some(name),
            })
        }
        "status" => {
            let (table_label, status) =
                split_first(rest).ok_or(ParseError::Usage(STATUS_USAGE))?;
            if status == "+" {
                Command::Seating(SeatingCommandPayload::AdvanceTable { table_label })
            } else {
                let status = status
                    .parse::<u8>()
                    .ok()
                    .and_then(TableStatus::from_code)
                    .ok_or(ParseError::InvalidStatus)?;
                Command::Seating(SeatingCommandPayload::SetTableStatus {
                    table_label,
                    status,
                })
            }
        }
        "advance" => Command::Seating(SeatingCommandPayload::AdvanceTable {
            table_label: required(rest, "advance <table>")?,
        }),
        "vacate" => Command::Seating(SeatingCommandPayload::VacateTable {
            table_label: required(rest, "vacate <table>")?,
        }),
        "reset" => Command::Seating(SeatingCommandPayload::ResetTable {
            table_label: required(rest, "reset <table>")?,
        }),
        "remove" | "delete" => Command::Seating(SeatingCommandPayload::RemoveParty {
            party_id: required(rest, "remove <name>")?,
        }),
        "find" => Command::Find(required(rest, "find <name>")?),
        "available" => Command::Available(parse_size(&required(rest, "available <size>")?)?),
        "tables" => Command::Tables,
        "waitlist" => Command::Waitlist,
        "patrons" => Command::Patrons,
        "stats" => Command::Stats,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn parse_arrive(rest: &str) -> Result<Command, ParseError> {
    let (size, rest) = split_first(rest).ok_or(ParseError::Usage(ARRIVE_USAGE))?;
    let (tier, name) = split_first(&rest).ok_or(ParseError::Usage(ARRIVE_USAGE))?;
    let name = name.as_str();

    let has_reservation = match tier.to_lowercase().as_str() {
        "r" | "y" | "yes" | "reserved" => true,
        "w" | "n" | "no" | "walk-in" => false,
        _ => return Err(ParseError::Usage(ARRIVE_USAGE)),
    };

    // trailing "@label" picks the table
    let (name, table_label) = match name.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if tail.len() > 1 && tail.starts_with('@') => {
            (head.trim(), Some(tail[1..].to_string()))
        }
        _ => (name, None),
    };
    if name.is_empty() {
        return Err(ParseError::Usage(ARRIVE_USAGE));
    }

    Ok(Command::Seating(SeatingCommandPayload::Arrive {
        party_id: name.to_string(),
        party_size: parse_size(&size)?,
        has_reservation,
        table_label,
    }))
}

fn parse_size(value: &str) -> Result<u32, ParseError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|&size| size > 0)
        .ok_or_else(|| ParseError::InvalidSize(value.to_string()))
}

fn required(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

/// First word and the trimmed remainder
fn split_first(rest: &str) -> Option<(String, String)> {
    if rest.is_empty() {
        return None;
    }
    Some(match rest.split_once(char::is_whitespace) {
        Some((first, tail)) => (first.to_string(), tail.trim().to_string()),
        None => (rest.to_string(), String::new()),
    })
}
