//! End-to-end editor flows over the library API: click toggles, drag
//! sessions, bulk fill, and summary counts.

use seatplanner::config::Config;
use seatplanner::constants::{COLS_PER_BLOCK, ROWS};
use seatplanner::models::{Group, SeatId, SeatMap};
use seatplanner::services::{begin_drag, continue_drag, PaintAction};
use seatplanner::tui::AppState;

fn seat(block: u8, row: u8, col: u8) -> SeatId {
    SeatId::new(block, row, col).expect("test seat in bounds")
}

fn fresh_state() -> AppState {
    AppState::new(Config::default())
}

#[test]
fn test_click_sequence_keeps_last_explicit_assignment() {
    let mut state = fresh_state();
    let target = seat(1, 3, 7);

    state.select_group(Group::B);
    state.click_seat(target);
    assert_eq!(state.map.get(target), Some(Group::B));

    state.select_group(Group::F);
    state.click_seat(target);
    assert_eq!(state.map.get(target), Some(Group::F));

    // Same group again: toggle off.
    state.click_seat(target);
    assert_eq!(state.map.get(target), None);
}

#[test]
fn test_drag_from_unassigned_paints_everything_crossed() {
    // Drag over {s1, s2, s3} starting on an unassigned seat; s2 already
    // belongs to a different group and is overwritten because the action
    // was fixed to paint at drag start.
    let mut map = SeatMap::new();
    let (s1, s2, s3) = (seat(1, 1, 1), seat(1, 1, 2), seat(1, 1, 3));
    map.set(s2, Some(Group::C));

    let active = Some(Group::G);
    let (mut session, _) = begin_drag(&mut map, active, s1).expect("drag starts");
    assert_eq!(session.action(), PaintAction::Paint);
    continue_drag(&mut map, &mut session, active, s2);
    continue_drag(&mut map, &mut session, active, s3);

    assert_eq!(map.get(s1), Some(Group::G));
    assert_eq!(map.get(s2), Some(Group::G));
    assert_eq!(map.get(s3), Some(Group::G));
}

#[test]
fn test_drag_from_assigned_erases_only_matching_seats() {
    let mut map = SeatMap::new();
    let (s1, s2, s3) = (seat(2, 2, 1), seat(2, 2, 2), seat(2, 2, 3));
    map.set(s1, Some(Group::B));
    map.set(s2, Some(Group::D));
    map.set(s3, Some(Group::B));

    let active = Some(Group::B);
    let (mut session, _) = begin_drag(&mut map, active, s1).expect("drag starts");
    assert_eq!(session.action(), PaintAction::Erase);
    continue_drag(&mut map, &mut session, active, s2);
    continue_drag(&mut map, &mut session, active, s3);

    assert_eq!(map.get(s1), None);
    assert_eq!(map.get(s2), Some(Group::D));
    assert_eq!(map.get(s3), None);
}

#[test]
fn test_bulk_fill_ten_columns_across_blocks() {
    let mut state = fresh_state();

    // Seed: distinguished group beyond the cutoff plus a foreign seat.
    state.select_group(Group::A);
    state.bulk_input.push_str("30");
    state.commit_bulk_input();
    state.bulk_input.clear();

    state.select_group(Group::E);
    state.click_seat(seat(1, 5, 12));

    state.select_group(Group::A);
    state.bulk_input.push_str("10");
    state.commit_bulk_input();

    // Columns 1-10 of block 1 carry the distinguished group.
    for row in 1..=ROWS {
        for col in 1..=10 {
            assert_eq!(state.map.get(seat(1, row, col)), Some(Group::A));
        }
    }
    // Everything past the cutoff that held A is cleared...
    for row in 1..=ROWS {
        for col in 11..=COLS_PER_BLOCK {
            let s = seat(1, row, col);
            if s == seat(1, 5, 12) {
                continue;
            }
            assert_eq!(state.map.get(s), None);
        }
        for col in 1..=COLS_PER_BLOCK {
            assert_eq!(state.map.get(seat(2, row, col)), None);
        }
    }
    // ...but the seat held by another group is untouched.
    assert_eq!(state.map.get(seat(1, 5, 12)), Some(Group::E));
}

#[test]
fn test_summary_counts_and_regular_total() {
    let mut state = fresh_state();

    state.select_group(Group::B);
    state.click_seat(seat(1, 1, 1));
    state.click_seat(seat(1, 1, 2));
    state.click_seat(seat(1, 1, 3));
    state.select_group(Group::C);
    state.click_seat(seat(2, 1, 1));
    state.click_seat(seat(2, 1, 2));

    assert_eq!(state.summary.count(Group::B), 3);
    assert_eq!(state.summary.count(Group::C), 2);
    assert_eq!(state.summary.total_regular, 5);
}

#[test]
fn test_pull_overwrites_local_only_state() {
    let mut state = fresh_state();
    state.select_group(Group::H);
    state.click_seat(seat(2, 9, 22));

    let remote = SeatMap::from_wire([("block1-r1-c1", "B")]);
    state.apply_remote(remote);

    assert_eq!(state.map.len(), 1);
    assert_eq!(state.map.get(seat(1, 1, 1)), Some(Group::B));
    assert_eq!(state.summary.count(Group::B), 1);
    assert_eq!(state.summary.count(Group::H), 0);
}

#[test]
fn test_bulk_group_rejects_direct_painting() {
    let mut state = fresh_state();
    state.select_group(Group::A);
    state.click_seat(seat(1, 1, 1));
    assert!(state.map.is_empty());
}
