// File: src/tui/handlers.rs
// Handles keyboard input for the TUI.
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Adding => match key.code {
            KeyCode::Enter => {
                if let Err(e) = state.submit_form() {
                    log::debug!("Course rejected: {} (field: {})", e, e.field());
                }
                None
            }
            KeyCode::Esc => {
                state.cancel_form();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                state.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.previous_field();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !c.is_control() {
                    state.enter_char(c);
                }
                None
            }
            KeyCode::Backspace => {
                state.delete_char();
                None
            }
            KeyCode::Left => {
                state.move_cursor_left();
                None
            }
            KeyCode::Right => {
                state.move_cursor_right();
                None
            }
            _ => None,
        },
        InputMode::ConfirmRemove(id) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    state.confirm_remove(id)
                }
                _ => state.cancel_prompt(),
            }
            None
        }
        InputMode::ConfirmClear => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.confirm_clear(),
                _ => state.cancel_prompt(),
            }
            None
        }
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Char('?') => {
                state.show_full_help = !state.show_full_help;
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                state.move_left();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.move_right();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.move_down();
                None
            }
            KeyCode::Tab => {
                state.next_occupant();
                None
            }
            KeyCode::Char('a') => {
                state.start_adding();
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                state.request_remove();
                None
            }
            KeyCode::Char('C') => {
                state.request_clear();
                None
            }
            KeyCode::Char('n') => {
                let now = state.now_slot;
                match now {
                    Some(slot) if state.focus_slot(slot) => {}
                    _ => state.message = "Not in a class period right now.".to_string(),
                }
                None
            }
            KeyCode::Char('w') => {
                state.toggle_weekend();
                Some(Action::SaveConfig)
            }
            KeyCode::Char('e') => {
                state.toggle_evening();
                Some(Action::SaveConfig)
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::TestContext;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press_all(state: &mut AppState, keys: &str) {
        for c in keys.chars() {
            handle_key_event(key(KeyCode::Char(c)), state);
        }
    }

    #[test]
    fn add_course_through_keys() {
        let mut s = AppState::new_with_ctx(Arc::new(TestContext::new()), Config::default());
        handle_key_event(key(KeyCode::Char('a')), &mut s);
        assert_eq!(s.mode, InputMode::Adding);
        press_all(&mut s, "quantum");
        handle_key_event(key(KeyCode::Tab), &mut s);
        press_all(&mut s, "m1m2");
        handle_key_event(key(KeyCode::Enter), &mut s);

        assert_eq!(s.mode, InputMode::Normal);
        assert_eq!(s.timetable.all_courses()[0].name, "quantum");
        // 'q' only quits outside the form
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &mut s),
            Some(Action::Quit)
        );
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut s = AppState::new_with_ctx(Arc::new(TestContext::new()), Config::default());
        s.timetable.add_course("A", "M1", None, None).unwrap();

        handle_key_event(key(KeyCode::Char('C')), &mut s);
        handle_key_event(key(KeyCode::Char('n')), &mut s);
        assert_eq!(s.timetable.len(), 1);

        handle_key_event(key(KeyCode::Char('C')), &mut s);
        handle_key_event(key(KeyCode::Char('y')), &mut s);
        assert!(s.timetable.is_empty());
    }

    #[test]
    fn toggles_request_config_save() {
        let mut s = AppState::new_with_ctx(Arc::new(TestContext::new()), Config::default());
        assert_eq!(
            handle_key_event(key(KeyCode::Char('e')), &mut s),
            Some(Action::SaveConfig)
        );
        assert!(!s.show_evening);
    }
}
