//! Tests for app construction and ticking

use std::time::{Duration, Instant};

use super::*;
use crate::config::SuggestionsConfig;
use crate::content::{PageData, PageStatus};
use crate::test_utils::test_helpers::{DEBOUNCE, test_app, test_app_with_config};

#[test]
fn test_home_start_focuses_search_bar_and_loads() {
    let mut t = test_app(Page::Home);

    assert_eq!(t.app.focus, Focus::SearchBar);
    assert_eq!(t.app.content.status(), &PageStatus::Loading);
    assert_eq!(t.last_content_request().unwrap().page, Page::Home);
}

#[test]
fn test_search_start_prefills_bar_without_lookup() {
    let mut t = test_app(Page::Search {
        query: "lofi".into(),
    });

    assert_eq!(t.app.search_bar.query(), "lofi");
    assert_eq!(t.app.focus, Focus::Content);
    t.app.tick(Instant::now() + DEBOUNCE * 2);
    assert!(t.drain_suggest_requests().is_empty());
}

#[test]
fn test_poll_timeout_is_bounded_by_debounce() {
    let mut t = test_app(Page::Home);
    let now = Instant::now();
    let idle = Duration::from_secs(1);

    assert_eq!(t.app.poll_timeout(now, idle), idle);

    t.type_text("c", now);
    assert_eq!(t.app.poll_timeout(now, idle), DEBOUNCE);
    assert_eq!(t.app.poll_timeout(now + DEBOUNCE, idle), Duration::ZERO);
}

#[test]
fn test_tick_applies_content_responses() {
    let mut t = test_app(Page::Home);
    let request = t.last_content_request().unwrap();
    t.content_responses
        .send(crate::content::ContentResponse {
            request_id: request.request_id,
            page: request.page,
            result: Ok(PageData::Popular(Vec::new())),
        })
        .unwrap();

    assert!(t.app.tick(Instant::now()));
    assert_eq!(
        t.app.content.status(),
        &PageStatus::Loaded(PageData::Popular(Vec::new()))
    );
}

#[test]
fn test_disabled_suggestions_never_look_up() {
    let config = Config {
        suggestions: SuggestionsConfig {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut t = test_app_with_config(Page::Home, &config);
    let now = Instant::now();

    t.type_text("cat", now);
    t.app.tick(now + DEBOUNCE);

    assert_eq!(t.app.search_bar.query(), "cat");
    assert!(t.drain_suggest_requests().is_empty());
}

#[test]
fn test_set_focus_to_same_pane_is_noop() {
    let mut t = test_app(Page::Home);
    let now = Instant::now();
    t.show_suggestions("cat", &["cat videos"], now);
    t.app.suggest.dismiss();

    t.app.set_focus(Focus::SearchBar);

    assert!(!t.app.suggest.is_visible());
}

#[test]
fn test_zero_max_visible_still_draws_one_row() {
    let config = Config {
        suggestions: SuggestionsConfig {
            max_visible: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut t = test_app_with_config(Page::Home, &config);
    t.show_suggestions("cat", &["cat videos", "cat memes"], Instant::now());
    t.press(ratatui::crossterm::event::KeyCode::Down, Instant::now());

    let output = t.render_to_string(60, 20);

    assert_eq!(t.app.max_visible, 1);
    assert!(output.contains("► cat videos"));
    assert_eq!(t.app.regions.suggestions.unwrap().rows, 1);
}
