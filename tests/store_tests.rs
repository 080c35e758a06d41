//! Integration tests for the event store

use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use event_scheduler::store::EventScheduler;
use event_scheduler::types::StoreError;

fn sample_insert(store: &EventScheduler, name: &str) -> u64 {
    store
        .insert(
            name.to_string(),
            "2024-01-01".to_string(),
            "10:00".to_string(),
            5,
        )
        .unwrap()
}

fn forward_ids(store: &EventScheduler) -> Vec<u64> {
    store.events_forward().iter().map(|r| r.id).collect()
}

fn reverse_ids(store: &EventScheduler) -> Vec<u64> {
    store.events_reverse().iter().map(|r| r.id).collect()
}

#[test]
fn test_insert_returns_sequential_ids() {
    let store = EventScheduler::in_memory();
    assert_eq!(sample_insert(&store, "a"), 1);
    assert_eq!(sample_insert(&store, "b"), 2);
    assert_eq!(sample_insert(&store, "c"), 3);
}

#[test]
fn test_forward_enumeration_preserves_insertion_order() {
    let store = EventScheduler::in_memory();
    for name in ["first", "second", "third", "fourth"] {
        sample_insert(&store, name);
    }

    let names: Vec<String> = store
        .events_forward()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["first", "second", "third", "fourth"]);
}

#[test]
fn test_reverse_is_exact_mirror_of_forward() {
    let store = EventScheduler::in_memory();

    // Holds for every state along the way, including empty.
    for round in 0..6 {
        let mut expected = forward_ids(&store);
        expected.reverse();
        assert_eq!(reverse_ids(&store), expected);
        sample_insert(&store, &format!("event {}", round));
    }

    store.remove(3).unwrap();
    store.remove(1).unwrap();
    let mut expected = forward_ids(&store);
    expected.reverse();
    assert_eq!(reverse_ids(&store), expected);
}

#[test]
fn test_ids_are_never_reused_after_delete() {
    let store = EventScheduler::in_memory();
    sample_insert(&store, "a");
    sample_insert(&store, "b");
    sample_insert(&store, "c");

    store.remove(3).unwrap();
    store.remove(2).unwrap();

    // Freed ids stay dead; the counter keeps climbing.
    assert_eq!(sample_insert(&store, "d"), 4);
    assert_eq!(sample_insert(&store, "e"), 5);
    assert_eq!(forward_ids(&store), vec![1, 4, 5]);
}

#[test]
fn test_find_on_empty_store_is_not_found() {
    let store = EventScheduler::in_memory();
    assert!(matches!(
        store.find(999),
        Err(StoreError::NotFound { id: 999 })
    ));
}

#[test]
fn test_find_returns_full_record() {
    let store = EventScheduler::in_memory();
    let id = store
        .insert(
            "Meeting".to_string(),
            "2024-01-01".to_string(),
            "10:00".to_string(),
            5,
        )
        .unwrap();

    let record = store.find(id).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Meeting");
    assert_eq!(record.date, "2024-01-01");
    assert_eq!(record.time, "10:00");
    assert_eq!(record.seats, 5);
}

#[test]
fn test_remove_unknown_id_leaves_enumeration_unchanged() {
    let store = EventScheduler::in_memory();
    sample_insert(&store, "a");
    sample_insert(&store, "b");

    let before = store.events_forward();
    assert!(matches!(
        store.remove(42),
        Err(StoreError::NotFound { id: 42 })
    ));
    assert_eq!(store.events_forward(), before);
}

#[test]
fn test_failed_update_changes_nothing() {
    let store = EventScheduler::in_memory();
    sample_insert(&store, "a");
    sample_insert(&store, "b");

    let before = store.events_forward();
    let result = store.update(
        42,
        "ghost".to_string(),
        "2030-01-01".to_string(),
        "00:00".to_string(),
        99,
    );
    assert!(matches!(result, Err(StoreError::NotFound { id: 42 })));
    assert_eq!(store.events_forward(), before);
}

#[test]
fn test_update_replaces_fields_and_keeps_id_and_position() {
    let store = EventScheduler::in_memory();
    sample_insert(&store, "Meeting");
    sample_insert(&store, "Call");

    store
        .update(
            2,
            "Call Rescheduled".to_string(),
            "2024-01-03".to_string(),
            "12:00".to_string(),
            4,
        )
        .unwrap();

    let record = store.find(2).unwrap();
    assert_eq!(record.id, 2);
    assert_eq!(record.name, "Call Rescheduled");
    assert_eq!(record.date, "2024-01-03");
    assert_eq!(record.time, "12:00");
    assert_eq!(record.seats, 4);
    assert_eq!(forward_ids(&store), vec![1, 2]);
}

#[test]
fn test_insert_remove_enumerate_scenario() {
    let store = EventScheduler::in_memory();
    let first = store
        .insert(
            "Meeting".to_string(),
            "2024-01-01".to_string(),
            "10:00".to_string(),
            5,
        )
        .unwrap();
    assert_eq!(first, 1);

    let second = store
        .insert(
            "Call".to_string(),
            "2024-01-02".to_string(),
            "11:00".to_string(),
            3,
        )
        .unwrap();
    assert_eq!(second, 2);

    store.remove(1).unwrap();

    let forward = store.events_forward();
    assert_eq!(forward.len(), 1);
    assert_eq!(forward[0].id, 2);
    assert_eq!(forward[0].name, "Call");
    assert_eq!(forward[0].date, "2024-01-02");
    assert_eq!(forward[0].time, "11:00");
    assert_eq!(forward[0].seats, 3);

    assert_eq!(store.events_reverse(), forward);
}

#[test]
fn test_generate_five_on_empty_store() {
    let store = EventScheduler::in_memory();
    let mut rng = StdRng::seed_from_u64(7);

    let ids = store.generate_with(5, &mut rng).unwrap();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let records = store.events_forward();
    assert_eq!(records.len(), 5);
    for (record, id) in records.iter().zip(1u64..) {
        assert_eq!(record.id, id);
        assert!(!record.name.is_empty());
        assert!(!record.date.is_empty());
        assert!(!record.time.is_empty());
        assert!((10..=109).contains(&record.seats));
    }
}

#[test]
fn test_generate_zero_is_a_noop() {
    let store = EventScheduler::in_memory();
    let mut rng = StdRng::seed_from_u64(7);

    let ids = store.generate_with(0, &mut rng).unwrap();
    assert!(ids.is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_generate_appends_after_existing_records() {
    let store = EventScheduler::in_memory();
    sample_insert(&store, "existing");

    let mut rng = StdRng::seed_from_u64(7);
    let ids = store.generate_with(3, &mut rng).unwrap();
    assert_eq!(ids, vec![2, 3, 4]);
    assert_eq!(forward_ids(&store), vec![1, 2, 3, 4]);
}

#[test]
fn test_forward_and_backward_visit_same_set_after_churn() {
    let store = EventScheduler::in_memory();
    let mut live: Vec<u64> = Vec::new();

    for i in 0..20 {
        live.push(sample_insert(&store, &format!("event {}", i)));
    }
    for id in [1, 20, 7, 13, 2] {
        store.remove(id).unwrap();
        live.retain(|&x| x != id);
    }

    assert_eq!(forward_ids(&store), live);
    let mut expected = live.clone();
    expected.reverse();
    assert_eq!(reverse_ids(&store), expected);
    assert_eq!(store.len(), live.len());
}

#[test]
fn test_persistence_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl").to_string_lossy().to_string();

    {
        let store = EventScheduler::with_file_path(path.clone());
        sample_insert(&store, "kept");
        sample_insert(&store, "dropped");
        sample_insert(&store, "also kept");
        store.remove(2).unwrap();
    }

    let reopened = EventScheduler::with_file_path(path);
    assert_eq!(forward_ids(&reopened), vec![1, 3]);
    assert_eq!(reopened.find(3).unwrap().name, "also kept");

    // The counter continues past everything ever assigned.
    assert_eq!(sample_insert(&reopened, "new"), 4);
}

#[test]
fn test_persisted_counter_survives_deleting_the_newest_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl").to_string_lossy().to_string();

    {
        let store = EventScheduler::with_file_path(path.clone());
        sample_insert(&store, "a");
        sample_insert(&store, "b");
        store.remove(2).unwrap();
    }

    // Without the persisted counter the reload would hand id 2 out again.
    let reopened = EventScheduler::with_file_path(path);
    assert_eq!(sample_insert(&reopened, "c"), 3);
}

#[test]
fn test_independent_stores_do_not_share_state() {
    let a = EventScheduler::in_memory();
    let b = EventScheduler::in_memory();

    sample_insert(&a, "only in a");
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
    assert_eq!(sample_insert(&b, "only in b"), 1);
}

#[test]
fn test_concurrent_inserts() {
    let store = Arc::new(EventScheduler::in_memory());
    let mut handles = vec![];

    for t in 0..10 {
        let store_clone = Arc::clone(&store);
        let handle = thread::spawn(move || {
            for i in 0..10 {
                store_clone
                    .insert(
                        format!("event {}-{}", t, i),
                        "2024-01-01".to_string(),
                        "10:00".to_string(),
                        5,
                    )
                    .unwrap();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let forward = forward_ids(&store);
    assert_eq!(forward.len(), 100, "All 100 inserts should be live");

    // Ids are unique and the two walks mirror each other exactly.
    let mut sorted = forward.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 100);
    assert_eq!(sorted, (1..=100).collect::<Vec<u64>>());

    let mut expected = forward;
    expected.reverse();
    assert_eq!(reverse_ids(&store), expected);
}

#[test]
fn test_concurrent_readers_and_writers() {
    let store = Arc::new(EventScheduler::in_memory());
    for i in 0..5 {
        sample_insert(&store, &format!("seed {}", i));
    }

    let mut handles = vec![];

    for _ in 0..4 {
        let store_clone = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let forward = store_clone.events_forward();
                let mut reverse = store_clone.events_reverse();
                reverse.reverse();
                // A reader must never observe a half-spliced chain.
                assert_eq!(forward, reverse);
            }
        }));
    }

    for t in 0..3 {
        let store_clone = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..20 {
                let id = store_clone
                    .insert(
                        format!("writer {}-{}", t, i),
                        "2024-01-01".to_string(),
                        "10:00".to_string(),
                        5,
                    )
                    .unwrap();
                if i % 2 == 0 {
                    store_clone.remove(id).unwrap();
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(store.len(), 5 + 3 * 10);
}
