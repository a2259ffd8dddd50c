//! 并发测试 - many threads driving one SeatingService

use host_stand::{Restaurant, SeatingManager, SeatingService};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::seating::CommandOutcome;
use shared::{SeatingCommand, SeatingCommandPayload, TableStatus};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

const THREADS: usize = 8;
const ARRIVALS_PER_THREAD: usize = 50;

fn create_service() -> SeatingService {
    let restaurant = Restaurant::new("Stress Bistro", &[2, 2, 4, 4, 6, 8]).unwrap();
    SeatingService::new(SeatingManager::new(restaurant))
}

fn arrive(party_id: String, party_size: u32, has_reservation: bool) -> SeatingCommand {
    SeatingCommand::new(SeatingCommandPayload::Arrive {
        party_id,
        party_size,
        has_reservation,
        table_label: None,
    })
}

fn assert_consistent(service: &SeatingService) {
    service.read(|m| {
        for table in m.table_snapshots() {
            assert_eq!(table.occupant.is_some(), table.status.is_occupied());
            if let Some(party) = &table.occupant {
                assert!(party.fits(table.capacity));
            }
        }
        let waitlist = m.waitlist_snapshot();
        let first_walk_in = waitlist
            .entries
            .iter()
            .position(|p| !p.has_reservation())
            .unwrap_or(waitlist.entries.len());
        assert!(waitlist.entries[first_walk_in..]
            .iter()
            .all(|p| !p.has_reservation()));
    });
}

#[test]
fn test_concurrent_arrivals_and_departures() {
    let service = create_service();
    let removed = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let service = service.clone();
            let removed = Arc::clone(&removed);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(t as u64);
                for i in 0..ARRIVALS_PER_THREAD {
                    let id = format!("T{}-{}", t, i);
                    let resp = service.execute_command(arrive(
                        id.clone(),
                        rng.gen_range(1..=8),
                        rng.gen_bool(0.3),
                    ));
                    assert!(resp.success, "{:?}", resp.error);

                    // every few arrivals this thread's party gives up
                    if rng.gen_bool(0.25) {
                        let resp = service.execute_command(SeatingCommand::new(
                            SeatingCommandPayload::RemoveParty { party_id: id },
                        ));
                        assert!(resp.success);
                        removed.fetch_add(1, Ordering::SeqCst);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_consistent(&service);
    let total = THREADS * ARRIVALS_PER_THREAD;
    let summary = service.read(|m| m.summary());
    assert_eq!(
        summary.total_patrons(),
        total - removed.load(Ordering::SeqCst)
    );
}

#[test]
fn test_concurrent_table_turnover() {
    let service = create_service();

    // fill every table, then queue more parties than tables
    for i in 0..30 {
        let resp = service.execute_command(arrive(format!("P{}", i), (i % 4 + 1) as u32, i % 5 == 0));
        assert!(resp.success);
    }
    let labels: Vec<String> = service.read(|m| {
        m.table_snapshots().into_iter().map(|t| t.label).collect()
    });

    let handles: Vec<_> = labels
        .into_iter()
        .map(|label| {
            let service = service.clone();
            thread::spawn(move || {
                let mut seated = 0;
                for _ in 0..5 {
                    let vacate = service.execute_command(SeatingCommand::new(
                        SeatingCommandPayload::VacateTable {
                            table_label: label.clone(),
                        },
                    ));
                    if !vacate.success {
                        break;
                    }
                    let reset = service.execute_command(SeatingCommand::new(
                        SeatingCommandPayload::ResetTable {
                            table_label: label.clone(),
                        },
                    ));
                    assert!(reset.success);
                    let seat = service.execute_command(SeatingCommand::new(
                        SeatingCommandPayload::SeatFromWaitlist {
                            table_label: label.clone(),
                            party_id: None,
                        },
                    ));
                    match seat.outcome {
                        Some(CommandOutcome::Seated { .. }) => seated += 1,
                        _ => break,
                    }
                }
                seated
            })
        })
        .collect();

    let seated: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert!(seated > 0);

    assert_consistent(&service);
    service.read(|m| {
        let summary = m.summary();
        assert_eq!(summary.tables_in_use + summary.tables_empty, 6);
        for table in m.table_snapshots() {
            assert!(table.occupant.is_some() || table.status == TableStatus::Ready);
        }
    });
}
