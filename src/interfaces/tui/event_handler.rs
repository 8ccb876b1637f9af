//! Event handling for the form
//!
//! Translates raw key events into app operations and, for the duration
//! field, into pure editor events. The duration field accepts only digits,
//! navigation and the clipboard chords; everything else is swallowed so the
//! template can never be corrupted from the keyboard.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FocusField};
use super::clipboard;
use crate::form::{EditorEvent, Motion};

/// Handle one key press. Returns `true` when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return true,
        // Inside the duration field Ctrl+C is the copy chord; everywhere
        // else it keeps its terminal meaning.
        KeyCode::Char('c') | KeyCode::Char('C')
            if ctrl && app.focus != FocusField::Duration =>
        {
            return true;
        }
        KeyCode::Tab => {
            app.focus_next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return false;
        }
        // Enter submits from anywhere, like the original form.
        KeyCode::Enter => {
            app.button_pressed(Instant::now());
            return false;
        }
        _ => {}
    }

    match app.focus {
        FocusField::Duration => handle_duration_key(app, key),
        FocusField::AdvancedToggle => {
            if key.code == KeyCode::Char(' ') {
                app.toggle_advanced();
            }
        }
        FocusField::ExpiryToggle => {
            if key.code == KeyCode::Char(' ') {
                app.toggle_expiry_mode();
            }
        }
        FocusField::Button => {
            if key.code == KeyCode::Char(' ') {
                app.button_pressed(Instant::now());
            }
        }
        _ => handle_text_key(app, key),
    }

    false
}

fn handle_duration_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let select = key.modifiers.contains(KeyModifiers::SHIFT);

    let event = match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'a' => Some(EditorEvent::SelectAll),
            'c' => Some(EditorEvent::Copy),
            'x' => Some(EditorEvent::Cut),
            'v' => clipboard::read_text().map(EditorEvent::Paste),
            _ => None,
        },
        KeyCode::Char(c) if c.is_ascii_digit() => Some(EditorEvent::Digit(c as u8 - b'0')),
        KeyCode::Backspace => Some(EditorEvent::Backspace),
        KeyCode::Delete => Some(EditorEvent::Delete),
        KeyCode::Left => Some(EditorEvent::Move {
            motion: Motion::Left,
            select,
        }),
        KeyCode::Right => Some(EditorEvent::Move {
            motion: Motion::Right,
            select,
        }),
        KeyCode::Home => Some(EditorEvent::Move {
            motion: Motion::Home,
            select,
        }),
        KeyCode::End => Some(EditorEvent::Move {
            motion: Motion::End,
            select,
        }),
        _ => None,
    };

    if let Some(event) = event {
        app.duration_event(event);
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => {
            if c.to_ascii_lowercase() == 'v'
                && let Some(text) = clipboard::read_text()
            {
                app.paste_text(&text);
            }
        }
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ButtonMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_esc_exits() {
        let mut app = App::new_detached();
        assert!(handle_key_event(&mut app, key(KeyCode::Esc)));
    }

    #[test]
    fn test_ctrl_c_exits_outside_duration() {
        let mut app = App::new_detached();
        assert!(handle_key_event(
            &mut app,
            key_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_ctrl_c_in_duration_is_copy_not_exit() {
        let mut app = App::new_detached();
        app.advanced_mode = true;
        app.focus = FocusField::Duration;
        assert!(!handle_key_event(
            &mut app,
            key_mod(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_typing_into_link_field() {
        let mut app = App::new_detached();
        for c in "https://a.io".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.link_input, "https://a.io");

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.link_input, "https://a.i");
    }

    #[test]
    fn test_duration_digit_and_suppression() {
        let mut app = App::new_detached();
        app.advanced_mode = true;
        app.focus = FocusField::Duration;

        handle_key_event(&mut app, key(KeyCode::Char('7')));
        assert_eq!(app.duration.text.as_str(), "00:00:00:07");

        // Letters and punctuation never reach the template.
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        handle_key_event(&mut app, key(KeyCode::Char(':')));
        assert_eq!(app.duration.text.as_str(), "00:00:00:07");
    }

    #[test]
    fn test_duration_shift_arrow_selects() {
        let mut app = App::new_detached();
        app.advanced_mode = true;
        app.focus = FocusField::Duration;

        handle_key_event(&mut app, key(KeyCode::Home));
        handle_key_event(&mut app, key_mod(KeyCode::Right, KeyModifiers::SHIFT));
        handle_key_event(&mut app, key_mod(KeyCode::Right, KeyModifiers::SHIFT));
        let sel = app.duration.selection.unwrap();
        assert_eq!((sel.start(), sel.end()), (0, 2));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new_detached();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, FocusField::AdvancedToggle);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus, FocusField::Link);
    }

    #[test]
    fn test_space_toggles_advanced() {
        let mut app = App::new_detached();
        app.focus = FocusField::AdvancedToggle;
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert!(app.advanced_mode);
    }

    #[test]
    fn test_enter_submits_from_link_field() {
        let mut app = App::new_detached();
        app.focus = FocusField::Link;
        handle_key_event(&mut app, key(KeyCode::Enter));
        // Empty link: the gate refuses and reports.
        assert_eq!(
            app.messages[0].text,
            "url is invalid, check it and try again."
        );
        assert_eq!(app.button.mode(), ButtonMode::Create);
    }
}
