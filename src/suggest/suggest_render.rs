//! Suggestion popup rendering
//!
//! Draws the suggestion list as a dropdown directly under the search bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::SuggestController;
use crate::format::truncate_to_width;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const MIN_POPUP_WIDTH: usize = 20;
const ITEM_PREFIX_WIDTH: usize = 2;

/// Where the popup landed and which slice of the list it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub area: Rect,
    /// Index of the suggestion on the first row
    pub first_index: usize,
    /// Item rows inside the border
    pub rows: usize,
}

impl PopupLayout {
    /// Suggestion index drawn on screen row `row`, if any
    pub fn index_at(&self, row: u16) -> Option<usize> {
        let first_row = self.area.y + 1;
        if row < first_row {
            return None;
        }
        let offset = (row - first_row) as usize;
        (offset < self.rows).then_some(self.first_index + offset)
    }
}

/// First row to draw so the highlighted item stays on screen
pub fn window_start(selected: Option<usize>, max_visible: usize) -> usize {
    match selected {
        Some(index) if index >= max_visible => index + 1 - max_visible,
        _ => 0,
    }
}

/// Render the suggestion dropdown below `input_area`
///
/// Returns where the popup was drawn, or `None` when the panel is hidden.
pub fn render_popup(
    controller: &SuggestController,
    max_visible: usize,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PopupLayout> {
    if !controller.is_visible() || max_visible == 0 {
        return None;
    }
    let suggestions = controller.suggestions();
    let selected = controller.selected();

    let visible_count = suggestions.len().min(max_visible);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = suggestions
        .iter()
        .map(|s| s.width() + ITEM_PREFIX_WIDTH)
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .max(MIN_POPUP_WIDTH);
    let popup_width = (max_text_width as u16).saturating_add(POPUP_PADDING);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }
    let text_width = (popup_area.width as usize)
        .saturating_sub(POPUP_BORDER_HEIGHT as usize + ITEM_PREFIX_WIDTH);

    // The frame may clip the popup below the requested height
    let rows = (popup_area.height - POPUP_BORDER_HEIGHT) as usize;
    let start = window_start(selected, rows);
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(i, suggestion)| {
            let text = truncate_to_width(suggestion, text_width);
            let line = if Some(i) == selected {
                // Highlight selected item with high contrast colors
                Line::from(Span::styled(
                    format!("► {}", text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(PopupLayout {
        area: popup_area,
        first_index: start,
        rows,
    })
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
