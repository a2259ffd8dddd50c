use super::*;
use shared::ErrorCode;

mod test_boundary;

fn create_test_manager(capacities: &[u32]) -> SeatingManager {
    SeatingManager::new(Restaurant::new("Test Bistro", capacities).unwrap())
}

fn arrive_cmd(party_id: &str, party_size: u32, has_reservation: bool) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::Arrive {
        party_id: party_id.to_string(),
        party_size,
        has_reservation,
        table_label: None,
    })
}

fn arrive_at_cmd(party_id: &str, party_size: u32, table_label: &str) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::Arrive {
        party_id: party_id.to_string(),
        party_size,
        has_reservation: false,
        table_label: Some(table_label.to_string()),
    })
}

fn table_cmd(make: fn(String) -> SeatingCommandPayload, table_label: &str) -> SeatingCommand {
    SeatingCommand::new(make(table_label.to_string()))
}

fn advance_cmd(table_label: &str) -> SeatingCommand {
    table_cmd(|table_label| SeatingCommandPayload::AdvanceTable { table_label }, table_label)
}

fn vacate_cmd(table_label: &str) -> SeatingCommand {
    table_cmd(|table_label| SeatingCommandPayload::VacateTable { table_label }, table_label)
}

fn reset_cmd(table_label: &str) -> SeatingCommand {
    table_cmd(|table_label| SeatingCommandPayload::ResetTable { table_label }, table_label)
}

fn status_cmd(table_label: &str, status: TableStatus) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::SetTableStatus {
        table_label: table_label.to_string(),
        status,
    })
}

fn seat_from_waitlist_cmd(table_label: &str, party_id: Option<&str>) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::SeatFromWaitlist {
        table_label: table_label.to_string(),
        party_id: party_id.map(str::to_string),
    })
}

fn remove_cmd(party_id: &str) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::RemoveParty {
        party_id: party_id.to_string(),
    })
}

/// Assert the command failed with `code` and return the message
fn expect_error(resp: CommandResponse, code: ErrorCode) -> String {
    assert!(!resp.success, "expected {:?}, got success {:?}", code, resp.outcome);
    let error = resp.error.unwrap();
    assert_eq!(error.code, code, "{}", error.message);
    error.message
}

fn waitlist_ids(manager: &SeatingManager) -> Vec<String> {
    manager
        .waitlist_snapshot()
        .entries
        .iter()
        .map(|p| p.id().to_string())
        .collect()
}

/// Every table's occupant agrees with its status
fn assert_tables_consistent(manager: &SeatingManager) {
    for table in manager.table_snapshots() {
        assert_eq!(
            table.occupant.is_some(),
            table.status.is_occupied(),
            "table {} is {:?} with occupant {:?}",
            table.label,
            table.status,
            table.occupant
        );
    }
}
