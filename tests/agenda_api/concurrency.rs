//! Concurrency Tests
//!
//! Every operation is atomic against the shared ledger:
//! - Concurrent creates never duplicate or skip ids
//! - Owner lists stay consistent under mixed load
//! - Notification order matches id order

use crate::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const NUM_THREADS: usize = 8;
const OPS_PER_THREAD: usize = 100;

#[test]
fn concurrent_creates_allocate_dense_unique_ids() {
    let (agenda, log) = create_agenda();
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let session = agenda.session(CallerId::new());
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                (0..OPS_PER_THREAD)
                    .map(|i| session.create_event(format!("e{}", i), "", i as i64).unwrap())
                    .collect::<Vec<EventId>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for h in handles {
        let ids = h.join().unwrap();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert!(all.insert(id), "duplicate id {}", id);
        }
    }

    let total = NUM_THREADS * OPS_PER_THREAD;
    assert_eq!(all.len(), total);
    assert!(all.iter().all(|id| id.as_u64() < total as u64));
    assert_eq!(log.len(), total);
}

#[test]
fn notifications_are_emitted_in_id_order() {
    let (agenda, log) = create_agenda();
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let session = agenda.session(CallerId::new());
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..OPS_PER_THREAD {
                    session.create_event("e", "", 0).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let ids: Vec<u64> = log.entries().iter().map(|n| n.id().as_u64()).collect();
    let expected: Vec<u64> = (0..(NUM_THREADS * OPS_PER_THREAD) as u64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn concurrent_create_delete_keeps_lists_consistent() {
    let (agenda, _) = create_agenda();
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let session = agenda.session(CallerId::new());
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut kept = Vec::new();
                for i in 0..OPS_PER_THREAD {
                    let id = session.create_event("e", "", i as i64).unwrap();
                    if i % 3 == 0 {
                        session.delete_event(id).unwrap();
                    } else {
                        kept.push(id);
                    }
                }
                (session, kept)
            })
        })
        .collect();

    let mut live = 0;
    for h in handles {
        let (session, kept) = h.join().unwrap();
        let listed: Vec<EventId> = session.list_events().iter().map(|e| e.id).collect();
        assert_eq!(listed, kept);
        live += kept.len();
    }
    assert_eq!(agenda.ledger().len(), live);
}

#[test]
fn racing_deletes_succeed_exactly_once() {
    let (agenda, log) = create_agenda();
    let owner = agenda.session(CallerId::new());
    let id = owner.create_event("contested", "", 0).unwrap();
    log.clear();

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let session = agenda.session(CallerId::new());
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                session.delete_event(id).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
    assert_eq!(log.len(), 1);
    assert!(owner.list_events().is_empty());
}

#[test]
fn concurrent_reads_see_consistent_details() {
    let (agenda, _) = create_agenda();
    let writer = agenda.session(CallerId::new());
    let id = writer.create_event("v0", "v0", 0).unwrap();

    let barrier = Arc::new(Barrier::new(NUM_THREADS + 1));
    let readers: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let agenda = agenda.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..OPS_PER_THREAD {
                    let details = agenda.get_event(id).unwrap();
                    // Name and description are always written together
                    assert_eq!(details.name, details.description);
                    assert_eq!(details.name, format!("v{}", details.timestamp));
                }
            })
        })
        .collect();

    barrier.wait();
    for i in 1..=OPS_PER_THREAD as i64 {
        let v = format!("v{}", i);
        writer.update_event(id, v.clone(), v, i).unwrap();
    }
    for h in readers {
        h.join().unwrap();
    }
}
