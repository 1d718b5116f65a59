//! Mouse click handling
//!
//! Clicks pick a suggestion or move focus to the pane under the pointer.

use ratatui::layout::{Position, Rect};

use super::app_state::{App, Focus};

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(column, row)))
}

/// Handle a left click at the given screen cell
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    // The popup overlaps the body, so it is checked first
    if contains(app.regions.suggestions.map(|popup| popup.area), column, row) {
        click_suggestions(app, row);
    } else if contains(app.regions.search_bar, column, row) {
        app.set_focus(Focus::SearchBar);
    } else if contains(app.regions.body, column, row) {
        app.set_focus(Focus::Content);
    }
}

fn click_suggestions(app: &mut App, row: u16) {
    // Border rows map to no item
    let Some(index) = app.regions.suggestions.and_then(|popup| popup.index_at(row)) else {
        return;
    };
    if let Some(query) = app.suggest.click(index) {
        app.submit_search(query);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
