//! Tests for the search bar text state

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_typing_reports_change() {
    let mut input = InputState::new();

    assert!(input.handle_key(key(KeyCode::Char('c'))));
    assert!(input.handle_key(key(KeyCode::Char('a'))));
    assert_eq!(input.query(), "ca");
}

#[test]
fn test_cursor_movement_is_not_a_change() {
    let mut input = InputState::new();
    input.set_text("cats");

    assert!(!input.handle_key(key(KeyCode::Left)));
    assert_eq!(input.query(), "cats");
}

#[test]
fn test_enter_never_splits_the_line() {
    let mut input = InputState::new();
    input.set_text("cats");

    assert!(!input.handle_key(key(KeyCode::Enter)));
    assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
    assert_eq!(input.textarea.lines().len(), 1);
}

#[test]
fn test_set_text_replaces_and_moves_cursor_to_end() {
    let mut input = InputState::new();
    input.set_text("dogs");
    input.set_text("cat memes");

    assert_eq!(input.query(), "cat memes");
    assert_eq!(input.textarea.cursor(), (0, 9));

    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.query(), "cat meme");
}

#[test]
fn test_clear() {
    let mut input = InputState::new();
    input.set_text("cats");
    input.clear();

    assert_eq!(input.query(), "");
}
