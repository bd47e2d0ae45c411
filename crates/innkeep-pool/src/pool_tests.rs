use super::*;
use proptest::prelude::*;
use std::sync::{Arc, Barrier};

fn ids(raw: &[u32]) -> Vec<RoomId> {
    raw.iter().copied().map(RoomId).collect()
}

#[test]
fn test_default_pool_has_reference_rooms() {
    let pool = RoomPool::default();
    assert_eq!(pool.len(), 5);
    assert!(!pool.is_empty());
    assert_eq!(pool.ids(), ids(&[101, 102, 103, 104, 105]));
}

#[test]
fn test_new_keeps_given_order() {
    let pool = RoomPool::new([7u32, 3, 12]).unwrap();
    assert_eq!(pool.ids(), ids(&[7, 3, 12]));
    assert_eq!(pool.scan_vacant(), ids(&[7, 3, 12]));
}

#[test]
fn test_new_rejects_duplicate_ids() {
    let err = RoomPool::new([101u32, 102, 101]).unwrap_err();
    assert_eq!(err, PoolError::DuplicateRoom(RoomId(101)));
}

#[test]
fn test_new_rejects_empty_list() {
    let err = RoomPool::new(Vec::<u32>::new()).unwrap_err();
    assert_eq!(err, PoolError::EmptyPool);
}

#[test]
fn test_allocate_then_inspect_reports_occupant() {
    let pool = RoomPool::default();
    let id = pool.allocate("john").unwrap();

    let view = pool.inspect(id).unwrap();
    assert!(view.reserved);
    assert_eq!(view.occupant.as_deref(), Some("john"));
}

#[test]
fn test_allocate_trims_occupant() {
    let pool = RoomPool::default();
    let id = pool.allocate("  doe\n").unwrap();
    assert_eq!(pool.inspect(id).unwrap().occupant.as_deref(), Some("doe"));
}

#[test]
fn test_allocate_rejects_blank_occupant() {
    let pool = RoomPool::default();
    assert_eq!(pool.allocate(""), Err(PoolError::EmptyOccupant));
    assert_eq!(pool.allocate(" \n\t"), Err(PoolError::EmptyOccupant));
    assert_eq!(pool.scan_vacant().len(), 5, "nothing should be reserved");
}

#[test]
fn test_allocate_skips_reserved_rooms() {
    let pool = RoomPool::default();
    pool.rooms()[0].reserve("walk-in");

    assert_eq!(pool.allocate("john"), Ok(RoomId(102)));
}

#[test]
fn test_reference_scenario() {
    let pool = RoomPool::default();

    assert_eq!(pool.allocate("john"), Ok(RoomId(101)));
    assert_eq!(pool.allocate("doe"), Ok(RoomId(102)));
    assert_eq!(pool.allocate("alex"), Ok(RoomId(103)));
    assert_eq!(pool.allocate("cael"), Ok(RoomId(104)));
    assert_eq!(pool.allocate("ryle"), Ok(RoomId(105)));
    assert_eq!(pool.allocate("atlas"), Err(PoolError::NoneAvailable));

    pool.cancel(RoomId(101)).unwrap();
    assert_eq!(pool.inspect(RoomId(101)), Ok(RoomView::vacant(RoomId(101))));
    assert_eq!(pool.scan_vacant(), vec![RoomId(101)]);
}

#[test]
fn test_cancel_reserved_room_makes_it_vacant() {
    let pool = RoomPool::default();
    let id = pool.allocate("john").unwrap();

    pool.cancel(id).unwrap();
    let view = pool.inspect(id).unwrap();
    assert!(!view.reserved);
    assert_eq!(view.occupant, None);
}

#[test]
fn test_cancel_vacant_room_fails_not_reserved() {
    let pool = RoomPool::default();
    assert_eq!(
        pool.cancel(RoomId(103)),
        Err(PoolError::NotReserved(RoomId(103)))
    );
}

#[test]
fn test_cancel_twice_fails_second_time() {
    let pool = RoomPool::default();
    let id = pool.allocate("john").unwrap();
    assert!(pool.cancel(id).is_ok());
    assert_eq!(pool.cancel(id), Err(PoolError::NotReserved(id)));
}

#[test]
fn test_cancel_unknown_room_fails_not_found() {
    let pool = RoomPool::default();
    assert_eq!(
        pool.cancel(RoomId(999)),
        Err(PoolError::NotFound(RoomId(999)))
    );
}

#[test]
fn test_inspect_unknown_room_fails_not_found() {
    let pool = RoomPool::default();
    assert_eq!(
        pool.inspect(RoomId(100)),
        Err(PoolError::NotFound(RoomId(100)))
    );
}

#[test]
fn test_status_and_views_track_reservations() {
    let pool = RoomPool::default();
    pool.allocate("john").unwrap();
    pool.allocate("doe").unwrap();

    let status = pool.status();
    assert_eq!(status.capacity, 5);
    assert_eq!(status.occupied, 2);
    assert_eq!(status.free(), 3);
    assert!(!status.is_full());

    let views = pool.views();
    assert_eq!(views.len(), 5);
    assert_eq!(views[1].occupant.as_deref(), Some("doe"));
    assert!(!views[2].reserved);
}

#[test]
fn test_pool_status_free_saturating() {
    let status = PoolStatus {
        capacity: 0,
        occupied: 5,
    };
    assert_eq!(status.free(), 0);
    assert!(status.is_full());
}

#[test]
fn test_format_vacancy_report_lists_ids() {
    let status = PoolStatus {
        capacity: 5,
        occupied: 3,
    };
    let msg = format_vacancy_report(&status, &ids(&[101, 104]));
    assert_eq!(msg, "2 of 5 rooms vacant: 101, 104");
}

#[test]
fn test_format_vacancy_report_full_pool() {
    let status = PoolStatus {
        capacity: 5,
        occupied: 5,
    };
    assert_eq!(format_vacancy_report(&status, &[]), "all 5 rooms occupied");
}

#[test]
fn test_concurrent_allocations_never_exceed_capacity() {
    const GUESTS: usize = 32;
    let pool = Arc::new(RoomPool::default());
    let barrier = Arc::new(Barrier::new(GUESTS));

    let handles: Vec<_> = (0..GUESTS)
        .map(|i| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                let guest = format!("guest-{i}");
                barrier.wait();
                (guest.clone(), pool.allocate(&guest))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners: Vec<_> = results
        .iter()
        .filter_map(|(guest, result)| result.as_ref().ok().map(|id| (guest, *id)))
        .collect();
    let losers = results
        .iter()
        .filter(|(_, result)| *result == Err(PoolError::NoneAvailable))
        .count();

    assert_eq!(winners.len(), 5);
    assert_eq!(losers, GUESTS - 5);
    assert!(pool.scan_vacant().is_empty());

    // Every room ends up with exactly the guest that was told it won.
    let mut rooms: Vec<_> = winners.iter().map(|(_, id)| *id).collect();
    rooms.sort();
    assert_eq!(rooms, ids(&[101, 102, 103, 104, 105]));
    for (guest, id) in winners {
        let view = pool.inspect(id).unwrap();
        assert_eq!(view.occupant.as_deref(), Some(guest.as_str()));
    }
}

#[test]
fn test_concurrent_cancel_succeeds_once() {
    const CALLERS: usize = 8;
    let pool = Arc::new(RoomPool::default());
    let id = pool.allocate("john").unwrap();
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                pool.cancel(id)
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Result::is_ok)
        .count();
    assert_eq!(successes, 1);
    assert!(!pool.inspect(id).unwrap().reserved);
}

#[test]
fn test_scan_runs_alongside_allocations() {
    let pool = Arc::new(RoomPool::default());

    std::thread::scope(|scope| {
        let scanner = scope.spawn(|| {
            for _ in 0..1_000 {
                let vacant = pool.scan_vacant();
                assert!(vacant.len() <= 5);
                assert!(vacant.windows(2).all(|w| w[0] < w[1]), "pool order kept");
            }
        });

        for round in 0..200 {
            let id = pool.allocate(&format!("guest-{round}")).unwrap();
            pool.cancel(id).unwrap();
        }
        scanner.join().unwrap();
    });

    assert_eq!(pool.scan_vacant().len(), 5);
}

proptest! {
    #[test]
    fn prop_fresh_pool_is_all_vacant(size in 1usize..64, first in 0u32..10_000) {
        let pool = RoomPool::new(first..first + size as u32).unwrap();

        prop_assert_eq!(pool.scan_vacant(), pool.ids());
        for id in pool.ids() {
            prop_assert!(!pool.inspect(id).unwrap().reserved);
        }
    }

    #[test]
    fn prop_sequential_allocations_fill_pool_once(size in 1usize..32) {
        let pool = RoomPool::new(1..=size as u32).unwrap();

        let mut allocated = Vec::new();
        for i in 0..size {
            allocated.push(pool.allocate(&format!("guest-{i}")).unwrap());
        }
        prop_assert_eq!(allocated, pool.ids());
        prop_assert_eq!(pool.allocate("late"), Err(PoolError::NoneAvailable));
    }
}
