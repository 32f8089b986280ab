//! Sync wire format and debounce behavior.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use seatplanner::models::{Group, SeatId, SeatMap};
use seatplanner::sync::{DebounceTimer, SyncState, SyncStatus};

fn seat(block: u8, row: u8, col: u8) -> SeatId {
    SeatId::new(block, row, col).expect("test seat in bounds")
}

#[test]
fn test_push_body_is_flat_id_to_label_object() {
    let mut map = SeatMap::new();
    map.set(seat(1, 1, 1), Some(Group::B));
    map.set(seat(1, 9, 22), Some(Group::A));
    map.set(seat(2, 4, 7), Some(Group::H));

    let body = serde_json::to_string(&map.to_wire()).unwrap();
    let parsed: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();

    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed.get("block1-r1-c1").map(String::as_str), Some("B"));
    assert_eq!(parsed.get("block1-r9-c22").map(String::as_str), Some("A"));
    assert_eq!(parsed.get("block2-r4-c7").map(String::as_str), Some("H"));
}

#[test]
fn test_remote_blob_round_trip() {
    let mut map = SeatMap::new();
    for (i, group) in Group::ALL.iter().enumerate() {
        map.set(seat(1, 1, (i + 1) as u8), Some(*group));
    }

    let wire = map.to_wire();
    let rebuilt = SeatMap::from_wire(wire.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    assert_eq!(rebuilt, map);
}

#[test]
fn test_rapid_mutations_collapse_to_one_push() {
    // N mutations inside the window must yield a single fire.
    let mut timer = DebounceTimer::new(Duration::from_secs(2));
    let start = Instant::now();

    for i in 0..10 {
        timer.reset(start + Duration::from_millis(i * 100));
    }

    let mut fires = 0;
    for i in 0..100 {
        if timer.fire_if_due(start + Duration::from_millis(i * 100)) {
            fires += 1;
        }
    }
    assert_eq!(fires, 1);
}

#[test]
fn test_mutation_marks_saving_until_fire() {
    let mut sync = SyncState::new(
        Some("http://localhost:9/store".to_string()),
        Duration::from_secs(2),
    );
    assert_eq!(sync.status, SyncStatus::Idle);

    sync.note_mutation(Instant::now());
    assert_eq!(sync.status, SyncStatus::Saving);
}

#[test]
fn test_offline_sync_is_inert() {
    let mut sync = SyncState::new(None, Duration::from_millis(1));
    let mut map = SeatMap::new();
    map.set(seat(1, 1, 1), Some(Group::B));

    sync.start_pull();
    sync.note_mutation(Instant::now());
    sync.tick(Instant::now() + Duration::from_secs(1), &map);

    assert_eq!(sync.status, SyncStatus::Idle);
    assert!(sync.poll().is_none());
    assert!(sync.flush_blocking(&map).is_ok());
}
