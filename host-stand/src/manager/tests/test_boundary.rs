use super::*;

#[test]
fn test_party_larger_than_every_table() {
    let mut manager = create_test_manager(&[2, 4]);
    let msg = expect_error(
        manager.execute_command(arrive_cmd("Big", 5, true)),
        ErrorCode::PartyTooLarge,
    );
    assert!(msg.contains("4 seats"));
    assert!(manager.waitlist_snapshot().is_empty());
}

#[test]
fn test_party_exactly_largest_table() {
    let mut manager = create_test_manager(&[2, 4]);
    assert!(manager.execute_command(arrive_cmd("A", 4, false)).success);
    let resp = manager.execute_command(arrive_cmd("B", 4, false));
    assert!(matches!(
        resp.outcome,
        Some(CommandOutcome::Waitlisted { position: 1, .. })
    ));
}

#[test]
fn test_only_reservation_removed_then_new_reservation() {
    let mut manager = create_test_manager(&[2]);
    manager.execute_command(arrive_cmd("A", 2, false));
    manager.execute_command(arrive_cmd("W1", 2, false));
    manager.execute_command(arrive_cmd("R1", 2, true));
    manager.execute_command(arrive_cmd("W2", 2, false));
    assert!(manager.execute_command(remove_cmd("R1")).success);

    let resp = manager.execute_command(arrive_cmd("R2", 2, true));
    assert!(matches!(
        resp.outcome,
        Some(CommandOutcome::Waitlisted { position: 1, .. })
    ));
    assert_eq!(waitlist_ids(&manager), vec!["R2", "W1", "W2"]);
    assert_eq!(manager.waitlist_snapshot().with_reservation, 1);
}

#[test]
fn test_remove_tail_then_add() {
    let mut manager = create_test_manager(&[2]);
    manager.execute_command(arrive_cmd("A", 2, false));
    manager.execute_command(arrive_cmd("W1", 2, false));
    manager.execute_command(arrive_cmd("W2", 2, false));
    manager.execute_command(remove_cmd("W2"));
    manager.execute_command(arrive_cmd("W3", 2, false));
    assert_eq!(waitlist_ids(&manager), vec!["W1", "W3"]);
}

#[test]
fn test_labels_and_ids_ignore_case() {
    let tables = vec![
        crate::seating::Table::new("Patio", 2).unwrap(),
        crate::seating::Table::new("Bar", 4).unwrap(),
    ];
    let mut manager = SeatingManager::new(Restaurant::from_tables("Bistro", tables).unwrap());

    let resp = manager.execute_command(arrive_at_cmd("Ana", 2, "patio"));
    assert!(matches!(
        resp.outcome,
        Some(CommandOutcome::Seated { ref table_label, .. }) if table_label == "Patio"
    ));
    assert!(manager.execute_command(advance_cmd("PATIO")).success);
    assert!(manager.execute_command(remove_cmd("aNA")).success);
}

#[test]
fn test_set_same_status_is_noop() {
    let mut manager = create_test_manager(&[4]);
    let resp = manager.execute_command(status_cmd("1", TableStatus::Ready));
    assert!(resp.success);
    assert_eq!(
        manager.table_snapshot("1").unwrap().status,
        TableStatus::Ready
    );
}

#[test]
fn test_ready_and_vacated_swap_while_empty() {
    let mut manager = create_test_manager(&[4]);
    assert!(
        manager
            .execute_command(status_cmd("1", TableStatus::Vacated))
            .success
    );
    // a vacated table is listed but nobody is seated there
    assert_eq!(manager.available_tables(2).len(), 1);
    let resp = manager.execute_command(arrive_cmd("A", 2, false));
    assert!(matches!(
        resp.outcome,
        Some(CommandOutcome::Waitlisted { .. })
    ));
    expect_error(
        manager.execute_command(arrive_at_cmd("B", 2, "1")),
        ErrorCode::TableNotReady,
    );
}

#[test]
fn test_seated_state_untouched_by_rejections() {
    let mut manager = create_test_manager(&[2]);
    manager.execute_command(arrive_cmd("A", 2, false));
    manager.execute_command(status_cmd("1", TableStatus::Served));
    let before = manager.table_snapshots();

    expect_error(
        manager.execute_command(arrive_at_cmd("B", 1, "1")),
        ErrorCode::TableOccupied,
    );
    expect_error(
        manager.execute_command(reset_cmd("1")),
        ErrorCode::StatusCrossesOccupancy,
    );
    expect_error(
        manager.execute_command(seat_from_waitlist_cmd("1", None)),
        ErrorCode::TableOccupied,
    );
    assert_eq!(manager.table_snapshots(), before);
}

#[test]
fn test_duplicate_party_names() {
    let mut manager = create_test_manager(&[2]);
    manager.execute_command(arrive_cmd("Smith", 2, false));
    manager.execute_command(arrive_cmd("Smith", 1, false));

    // seated Smith is found first
    let record = manager.locate_patron("smith").unwrap();
    assert!(matches!(
        record.location,
        shared::seating::PatronLocation::Seated { .. }
    ));
    // removal drains the waitlist before touching tables
    let resp = manager.execute_command(remove_cmd("smith"));
    assert!(matches!(
        resp.outcome,
        Some(CommandOutcome::PartyRemoved {
            table_label: None,
            ..
        })
    ));
}

#[test]
fn test_processed_history_is_bounded() {
    let restaurant = Restaurant::new("Test Bistro", &[4]).unwrap();
    let mut manager = SeatingManager::with_history_limit(restaurant, 3);

    let first = arrive_cmd("First", 2, false);
    assert!(manager.execute_command(first.clone()).success);
    assert!(manager.execute_command(remove_cmd("First")).success);

    for i in 0..1000 {
        let id = format!("P{}", i);
        assert!(manager.execute_command(arrive_cmd(&id, 2, false)).success);
        assert!(manager.execute_command(remove_cmd(&id)).success);
    }
    assert_eq!(manager.processed_count(), 3);
    assert_eq!(manager.summary().total_patrons(), 0);

    // the oldest id was evicted, so it is applied again
    let replay = manager.execute_command(first);
    assert!(replay.success);
    assert!(matches!(replay.outcome, Some(CommandOutcome::Seated { .. })));
}

#[test]
fn test_recent_duplicate_still_detected_at_limit() {
    let restaurant = Restaurant::new("Test Bistro", &[4, 4]).unwrap();
    let mut manager = SeatingManager::with_history_limit(restaurant, 2);

    let a = arrive_cmd("A", 2, false);
    let b = arrive_cmd("B", 2, false);
    assert!(manager.execute_command(a).success);
    assert!(manager.execute_command(b.clone()).success);

    let dup = manager.execute_command(b);
    assert!(dup.success);
    assert!(dup.outcome.is_none());
    assert_eq!(manager.summary().tables_in_use, 2);
}
