//! Tests for mouse click handling

use std::time::Instant;

use ratatui::crossterm::event::KeyCode;

use super::handle_click;
use crate::app::Focus;
use crate::content::Page;
use crate::test_utils::test_helpers::{TestApp, test_app};

/// Search bar focused with two suggestions drawn under it
fn app_with_popup() -> TestApp {
    let mut t = test_app(Page::Home);
    t.show_suggestions("cat", &["cat videos", "cat memes"], Instant::now());
    t.render_to_string(60, 20);
    t
}

#[test]
fn test_render_records_popup_region() {
    let t = app_with_popup();

    let popup = t.app.regions.suggestions.unwrap().area;
    assert_eq!(popup.y, 3);
    assert_eq!(popup.height, 4);
}

#[test]
fn test_click_on_suggestion_searches_it() {
    let mut t = app_with_popup();

    handle_click(&mut t.app, 5, 5);

    assert_eq!(
        t.app.content.page(),
        &Page::Search {
            query: "cat memes".into()
        }
    );
    assert_eq!(t.app.search_bar.query(), "cat memes");
    assert_eq!(t.app.focus, Focus::Content);
}

#[test]
fn test_click_on_popup_border_is_ignored() {
    let mut t = app_with_popup();

    handle_click(&mut t.app, 5, 3);

    assert_eq!(t.app.content.page(), &Page::Home);
    assert!(t.app.suggest.is_visible());
}

#[test]
fn test_click_body_moves_focus_to_content() {
    let mut t = app_with_popup();

    handle_click(&mut t.app, 10, 12);

    assert_eq!(t.app.focus, Focus::Content);
    assert!(!t.app.suggest.is_visible());
}

#[test]
fn test_click_search_bar_refocuses_it() {
    let mut t = app_with_popup();
    t.app.set_focus(Focus::Content);
    t.render_to_string(60, 20);

    handle_click(&mut t.app, 5, 1);

    assert_eq!(t.app.focus, Focus::SearchBar);
    assert!(t.app.suggest.is_visible());
}

#[test]
fn test_click_before_first_render_does_nothing() {
    let mut t = test_app(Page::Home);

    handle_click(&mut t.app, 5, 5);

    assert_eq!(t.app.focus, Focus::SearchBar);
}

#[test]
fn test_click_in_clipped_popup_picks_the_drawn_item() {
    let mut t = test_app(Page::Home);
    let items: Vec<String> = (0..10).map(|i| format!("item{}", i)).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let now = Instant::now();
    t.show_suggestions("item", &refs, now);
    for _ in 0..9 {
        t.press(KeyCode::Down, now);
    }
    let output = t.render_to_string(60, 12);
    assert!(output.contains("► item8"));

    // Popup starts at row 3; its last item row is 10
    handle_click(&mut t.app, 5, 10);

    assert_eq!(
        t.app.content.page(),
        &Page::Search {
            query: "item8".into()
        }
    );
}
