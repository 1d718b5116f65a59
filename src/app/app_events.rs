use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::content::Page;
use crate::suggest::Direction;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::SearchBar => self.handle_search_bar_key(key, now),
            Focus::Content => self.handle_content_key(key),
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            let next = match self.focus {
                Focus::SearchBar => Focus::Content,
                Focus::Content => Focus::SearchBar,
            };
            self.set_focus(next);
            return true;
        }

        false
    }

    fn handle_search_bar_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up if self.suggest.is_visible() => {
                self.suggest.move_selection(Direction::Up);
            }
            KeyCode::Down if self.suggest.is_visible() => {
                self.suggest.move_selection(Direction::Down);
            }
            KeyCode::Up | KeyCode::Down => {}
            KeyCode::Enter => {
                // The bar can be pre-filled without going through set_query
                if self.suggest.query() != self.search_bar.query() {
                    let text = self.search_bar.query().to_string();
                    self.suggest.set_query(&text, now);
                }
                if let Some(query) = self.suggest.accept_selection() {
                    self.submit_search(query);
                }
            }
            KeyCode::Esc => {
                if self.suggest.is_visible() {
                    self.suggest.dismiss();
                } else {
                    self.set_focus(Focus::Content);
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search_bar.clear();
                self.suggest.clear();
            }
            _ => {
                if self.search_bar.handle_key(key) {
                    let text = self.search_bar.query().to_string();
                    self.suggest.set_query(&text, now);
                }
            }
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.content.move_cursor(Direction::Down),
            KeyCode::Char('k') | KeyCode::Up => self.content.move_cursor(Direction::Up),
            KeyCode::Enter => {
                if let Some(video) = self.content.selected_video() {
                    let video_id = video.video_id.clone();
                    self.content.open(Page::Watch { video_id });
                }
            }
            KeyCode::Backspace | KeyCode::Char('b') => {
                self.content.back();
            }
            KeyCode::Char('r') => self.content.reload(),
            KeyCode::Char('H') => self.content.open(Page::Home),
            KeyCode::Char('/') => self.set_focus(Focus::SearchBar),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
