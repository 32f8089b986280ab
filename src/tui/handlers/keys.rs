//! Keyboard input handler.
//!
//! Group selection (1-8 / a-h), cursor movement, seat toggling, and
//! the bulk-fill input field. While the bulk-fill group is active,
//! digits and backspace edit the column-count input instead of
//! selecting groups.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Group;
use crate::tui::AppState;

/// Handle a key event for the main UI. Returns true when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(true);
        }

        KeyCode::Esc => {
            // Leaving the bulk input counts as losing focus: commit first.
            if state.bulk_input_active() {
                state.commit_bulk_input();
            }
            state.active_group = None;
        }

        KeyCode::Char(c @ '0'..='9') => {
            if state.bulk_input_active() {
                state.bulk_input.push(c);
            } else if let Some(index) = c.to_digit(10).and_then(|d| d.checked_sub(1)) {
                if let Some(group) = Group::from_index(index as usize) {
                    state.select_group(group);
                }
            }
        }

        KeyCode::Char(c @ ('a'..='h' | 'A'..='H')) => {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            if let Some(group) = Group::from_index(index) {
                state.select_group(group);
            }
        }

        KeyCode::Backspace => {
            if state.bulk_input_active() {
                state.bulk_input.pop();
            }
        }

        KeyCode::Enter => {
            if state.bulk_input_active() {
                state.commit_bulk_input();
            } else {
                state.toggle_cursor_seat();
            }
        }
        KeyCode::Char(' ') => state.toggle_cursor_seat(),

        KeyCode::Up => state.move_cursor(0, -1),
        KeyCode::Down => state.move_cursor(0, 1),
        KeyCode::Left => state.move_cursor(-1, 0),
        KeyCode::Right => state.move_cursor(1, 0),

        _ => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::SeatId;

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        assert!(handle_key_event(&mut s, press(KeyCode::Char('q'))).unwrap());
        assert!(handle_key_event(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
        .unwrap());
    }

    #[test]
    fn test_digit_selects_group() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('2'))).unwrap();
        assert_eq!(s.active_group, Some(Group::B));
        handle_key_event(&mut s, press(KeyCode::Char('8'))).unwrap();
        assert_eq!(s.active_group, Some(Group::H));
    }

    #[test]
    fn test_letter_selects_group() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('c'))).unwrap();
        assert_eq!(s.active_group, Some(Group::C));
        handle_key_event(&mut s, press(KeyCode::Char('A'))).unwrap();
        assert_eq!(s.active_group, Some(Group::A));
    }

    #[test]
    fn test_digits_feed_bulk_input_when_a_active() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('1'))).unwrap();
        assert!(s.bulk_input_active());

        handle_key_event(&mut s, press(KeyCode::Char('1'))).unwrap();
        handle_key_event(&mut s, press(KeyCode::Char('0'))).unwrap();
        assert_eq!(s.bulk_input, "10");

        handle_key_event(&mut s, press(KeyCode::Backspace)).unwrap();
        assert_eq!(s.bulk_input, "1");
    }

    #[test]
    fn test_enter_commits_bulk_fill() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('1'))).unwrap();
        handle_key_event(&mut s, press(KeyCode::Char('3'))).unwrap();
        handle_key_event(&mut s, press(KeyCode::Enter)).unwrap();

        assert_eq!(s.map.get(SeatId::new(1, 1, 3).unwrap()), Some(Group::A));
        assert_eq!(s.map.get(SeatId::new(1, 1, 4).unwrap()), None);
    }

    #[test]
    fn test_space_toggles_seat_at_cursor() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('2'))).unwrap();
        let cursor = s.cursor;

        handle_key_event(&mut s, press(KeyCode::Char(' '))).unwrap();
        assert_eq!(s.map.get(cursor), Some(Group::B));

        handle_key_event(&mut s, press(KeyCode::Char(' '))).unwrap();
        assert_eq!(s.map.get(cursor), None);
    }

    #[test]
    fn test_space_without_group_is_noop() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char(' '))).unwrap();
        assert!(s.map.is_empty());
    }

    #[test]
    fn test_cursor_moves_across_the_aisle() {
        let mut s = state();
        s.cursor = SeatId::new(1, 1, 22).unwrap();
        handle_key_event(&mut s, press(KeyCode::Right)).unwrap();
        assert_eq!(s.cursor, SeatId::new(2, 1, 1).unwrap());

        handle_key_event(&mut s, press(KeyCode::Left)).unwrap();
        assert_eq!(s.cursor, SeatId::new(1, 1, 22).unwrap());
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut s = state();
        s.cursor = SeatId::new(1, 1, 1).unwrap();
        handle_key_event(&mut s, press(KeyCode::Left)).unwrap();
        handle_key_event(&mut s, press(KeyCode::Up)).unwrap();
        assert_eq!(s.cursor, SeatId::new(1, 1, 1).unwrap());
    }

    #[test]
    fn test_esc_commits_input_and_deselects() {
        let mut s = state();
        handle_key_event(&mut s, press(KeyCode::Char('a'))).unwrap();
        handle_key_event(&mut s, press(KeyCode::Char('2'))).unwrap();
        handle_key_event(&mut s, press(KeyCode::Esc)).unwrap();

        assert_eq!(s.active_group, None);
        assert_eq!(s.map.get(SeatId::new(1, 1, 2).unwrap()), Some(Group::A));
    }
}
