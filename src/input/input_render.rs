//! Search bar rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::InputState;

/// Render the search bar (top)
///
/// The cursor is only drawn while the bar has focus.
pub fn render_field(input: &mut InputState, focused: bool, loading: bool, frame: &mut Frame, area: Rect) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if loading {
        block = block.title_top(
            Line::from(Span::styled(" ... ", Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Right),
        );
    }

    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    input.textarea.set_block(block);
    input.textarea.set_cursor_style(cursor_style);
    frame.render_widget(&input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
