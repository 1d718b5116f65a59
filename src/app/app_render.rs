use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus, LayoutRegions};
use crate::content::content_render;
use crate::input::input_render;
use crate::suggest::suggest_render;

const SEARCH_BAR_HINTS: &str = "Enter search  ↑↓ suggestions  Esc close  Tab results  Ctrl+C quit";
const CONTENT_HINTS: &str = "j/k move  Enter open  b back  r retry  H home  / search  q quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [search_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let search_focused = self.focus == Focus::SearchBar;

        input_render::render_field(
            &mut self.search_bar,
            search_focused,
            self.suggest.is_loading(),
            frame,
            search_area,
        );
        content_render::render_page(&self.content, frame, body_area, !search_focused);
        self.render_status_line(frame, status_area);

        // Popup last so it overlays the body
        let suggestions_area = if search_focused {
            suggest_render::render_popup(&self.suggest, self.max_visible, frame, search_area)
        } else {
            None
        };

        self.regions = LayoutRegions {
            search_bar: Some(search_area),
            body: Some(body_area),
            suggestions: suggestions_area,
        };
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status_message {
            Some(message) => Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )),
            None => {
                let hints = match self.focus {
                    Focus::SearchBar => SEARCH_BAR_HINTS,
                    Focus::Content => CONTENT_HINTS,
                };
                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
