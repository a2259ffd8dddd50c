//! Host stand prompt
//!
//! Turns text lines into seating commands or queries and renders the result.
//! All state lives in the [`SeatingService`]; this layer only formats.

pub mod parse;
pub mod render;

pub use parse::{Command, ParseError, parse_line};

use crate::manager::SeatingService;
use shared::SeatingCommand;

/// Result of one prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    Output(String),
    Quit,
}

/// Handles prompt lines against one service
#[derive(Debug, Clone)]
pub struct HostStand {
    service: SeatingService,
}

impl HostStand {
    pub fn new(service: SeatingService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &SeatingService {
        &self.service
    }

    /// Banner printed above the first prompt
    pub fn banner(&self) -> String {
        let name = self.service.read(|m| m.restaurant().name().to_uppercase());
        format!("\n\t\t{}\n\nType \"help\" for a list of commands.", name)
    }

    pub fn handle_line(&self, line: &str) -> LineResult {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(e) => return LineResult::Output(e.to_string()),
        };

        let output = match command {
            Command::Quit => return LineResult::Quit,
            Command::Empty => String::new(),
            Command::Help => render::help().to_string(),
            Command::Seating(payload) => {
                let resp = self
                    .service
                    .execute_command(SeatingCommand::new(payload));
                match (resp.outcome, resp.error) {
                    (Some(outcome), _) => {
                        let waiting = self.service.read(|m| m.waitlist_snapshot().total);
                        render::outcome(&outcome, waiting)
                    }
                    (None, Some(error)) => error.message,
                    (None, None) => String::new(),
                }
            }
            Command::Find(name) => self
                .service
                .read(|m| render::patron(m.locate_patron(&name).as_ref(), &name)),
            Command::Available(size) => self
                .service
                .read(|m| render::available(size, &m.available_tables(size))),
            Command::Tables => self
                .service
                .read(|m| render::tables(&m.summary(), &m.table_snapshots())),
            Command::Waitlist => self.service.read(|m| render::waitlist(&m.waitlist_snapshot())),
            Command::Patrons => self
                .service
                .read(|m| render::patrons(&m.patrons(), &m.waitlist_snapshot())),
            Command::Stats => self.service.read(|m| render::stats(&m.summary())),
            Command::Json => self.service.read(|m| {
                let state = serde_json::json!({
                    "summary": m.summary(),
                    "tables": m.table_snapshots(),
                    "waitlist": m.waitlist_snapshot(),
                });
                serde_json::to_string_pretty(&state).unwrap_or_else(|e| e.to_string())
            }),
        };
        LineResult::Output(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::SeatingManager;
    use crate::seating::Restaurant;

    fn host_stand() -> HostStand {
        let restaurant = Restaurant::new("Bistro", &[2, 4]).unwrap();
        HostStand::new(SeatingService::new(SeatingManager::new(restaurant)))
    }

    fn output(stand: &HostStand, line: &str) -> String {
        match stand.handle_line(line) {
            LineResult::Output(text) => text,
            LineResult::Quit => panic!("unexpected quit for {:?}", line),
        }
    }

    #[test]
    fn test_session() {
        let stand = host_stand();
        assert_eq!(
            output(&stand, "arrive 3 r Curtis"),
            "Curtis (R, party of 3) may be seated at Table 2."
        );
        assert_eq!(
            output(&stand, "arrive 4 w Ana"),
            "Ana (party of 4) has been added to the waitlist (position 1)."
        );
        assert_eq!(
            output(&stand, "find curtis"),
            "Curtis (R, party of 3) is seated at Table 2."
        );
        assert_eq!(
            output(&stand, "status 2 +"),
            "Table 2 is now \"Waiting for food\"."
        );
        assert_eq!(
            output(&stand, "vacate 2"),
            "Curtis (R, party of 3) has left Table 2."
        );
        assert_eq!(
            output(&stand, "reset 2"),
            "Table 2 is now available for Ana (party of 4). Type \"seat 2\" to seat them."
        );
        assert_eq!(
            output(&stand, "seat 2"),
            "Ana (party of 4) may be seated at Table 2."
        );
        assert_eq!(output(&stand, "waitlist"), render::NO_WAITING_PATRONS);
    }

    #[test]
    fn test_errors_are_printed() {
        let stand = host_stand();
        assert_eq!(output(&stand, "vacate 9"), "Table 9 was not found");
        assert!(output(&stand, "fly").starts_with("Unknown command"));
        assert_eq!(
            output(&stand, "arrive 5 w Big"),
            "A party of 5 is larger than the largest table (4 seats)"
        );
    }

    #[test]
    fn test_json_dump() {
        let stand = host_stand();
        output(&stand, "arrive 2 w Ana");
        let json: serde_json::Value = serde_json::from_str(&output(&stand, "json")).unwrap();
        assert_eq!(json["summary"]["tables_in_use"], 1);
        assert_eq!(json["tables"][0]["status"], "AWAITING_ORDER");
    }

    #[test]
    fn test_quit() {
        assert_eq!(host_stand().handle_line("quit"), LineResult::Quit);
    }
}
