//! Tests for suggestion popup rendering

use std::sync::mpsc;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;
use crate::suggest::{Direction, SuggestResponse};

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 12;

fn controller_with(suggestions: &[&str]) -> SuggestController {
    let (request_tx, mut request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (_response_tx, response_rx) = mpsc::channel();
    let mut controller = SuggestController::new(0);
    controller.set_channels(request_tx, response_rx);
    controller.set_query("cat", Instant::now());
    controller.tick(Instant::now());
    let request = request_rx.try_recv().unwrap();
    controller.apply_response(SuggestResponse {
        query: request.query,
        generation: request.generation,
        result: Ok(suggestions.iter().map(|s| s.to_string()).collect()),
    });
    controller
}

fn render(controller: &SuggestController, max_visible: usize) -> (String, Option<Rect>) {
    let (output, layout) = render_sized(controller, max_visible, TEST_HEIGHT);
    (output, layout.map(|l| l.area))
}

fn render_sized(
    controller: &SuggestController,
    max_visible: usize,
    height: u16,
) -> (String, Option<PopupLayout>) {
    let backend = TestBackend::new(TEST_WIDTH, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut area = None;
    terminal
        .draw(|f| {
            let input_area = Rect::new(0, 0, TEST_WIDTH, 3);
            area = render_popup(controller, max_visible, f, input_area);
        })
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_hidden_panel_draws_nothing() {
    let controller = SuggestController::new(0);
    let (output, area) = render(&controller, 10);
    assert!(area.is_none());
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_popup_lists_suggestions_below_input() {
    let controller = controller_with(&["cat videos", "cat memes"]);
    let (output, area) = render(&controller, 10);

    let area = area.unwrap();
    assert_eq!(area.y, 3);
    assert_eq!(area.height, 4);
    assert!(output.contains("Suggestions"));
    assert!(output.contains("cat videos"));
    assert!(output.contains("cat memes"));
    assert!(!output.contains('►'));
}

#[test]
fn test_selected_item_is_marked() {
    let mut controller = controller_with(&["cat videos", "cat memes"]);
    controller.move_selection(Direction::Down);
    controller.move_selection(Direction::Down);

    let (output, _) = render(&controller, 10);
    assert!(output.contains("► cat memes"));
}

#[test]
fn test_window_scrolls_to_keep_selection_visible() {
    let mut controller = controller_with(&["a1", "a2", "a3", "a4", "a5"]);
    for _ in 0..5 {
        controller.move_selection(Direction::Down);
    }

    let (output, area) = render(&controller, 3);
    assert_eq!(area.unwrap().height, 5);
    assert!(output.contains("► a5"));
    assert!(output.contains("a3"));
    assert!(!output.contains("a1"));
}

#[test]
fn test_window_start() {
    assert_eq!(window_start(None, 3), 0);
    assert_eq!(window_start(Some(2), 3), 0);
    assert_eq!(window_start(Some(3), 3), 1);
    assert_eq!(window_start(Some(9), 3), 7);
}

#[test]
fn test_clipped_popup_keeps_selection_on_screen() {
    let items: Vec<String> = (0..10).map(|i| format!("item{}", i)).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let mut controller = controller_with(&refs);
    for _ in 0..9 {
        controller.move_selection(Direction::Down);
    }
    assert_eq!(controller.selected(), Some(8));

    // Only 9 rows remain below the input, so 7 items fit inside the border
    let (output, layout) = render_sized(&controller, 10, TEST_HEIGHT);
    let layout = layout.unwrap();

    assert_eq!(layout.rows, 7);
    assert_eq!(layout.first_index, 2);
    assert!(output.contains("► item8"));
    assert!(output.contains("item2"));
    assert!(!output.contains("item1"));
    assert!(!output.contains("item9"));
}

#[test]
fn test_layout_maps_rows_to_indices() {
    let layout = PopupLayout {
        area: Rect::new(1, 3, 24, 9),
        first_index: 2,
        rows: 7,
    };

    assert_eq!(layout.index_at(3), None);
    assert_eq!(layout.index_at(4), Some(2));
    assert_eq!(layout.index_at(10), Some(8));
    assert_eq!(layout.index_at(11), None);
}
