//! Page body rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::content_state::ContentState;
use super::page::{Page, PageData, PageStatus};
use crate::api::Video;
use crate::format::{pick_thumbnail, truncate_to_width, video_meta_line};

const DESCRIPTION_LINES: u16 = 4;
/// Title, meta line, thumbnail line, blank, description, borders
const WATCH_HEADER_HEIGHT: u16 = 4 + DESCRIPTION_LINES + 2;

/// Render the current page into `area`
pub fn render_page(state: &ContentState, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.page().title()))
        .border_style(Style::default().fg(border_color));

    match state.status() {
        PageStatus::Loading => {
            let text = Paragraph::new(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Yellow),
            )))
            .block(block);
            frame.render_widget(text, area);
        }
        PageStatus::Failed(message) => render_failure(message, state.can_go_back(), frame, area, block),
        PageStatus::Loaded(PageData::Watch { video, related }) => {
            render_watch(video, related, state.cursor(), frame, area, block)
        }
        PageStatus::Loaded(data) => {
            if data.videos().is_empty() {
                let message = match state.page() {
                    Page::Search { query } => format!("No results found for \"{}\"", query),
                    _ => "No videos to show".to_string(),
                };
                let text = Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::DarkGray),
                )))
                .block(block);
                frame.render_widget(text, area);
            } else {
                render_video_list(data.videos(), state.cursor(), frame, area, block);
            }
        }
    }
}

fn render_failure(message: &str, can_go_back: bool, frame: &mut Frame, area: Rect, block: Block) {
    let mut hints = vec![Span::styled("r", Style::default().fg(Color::Cyan)), Span::raw(" retry")];
    if can_go_back {
        hints.push(Span::raw("  "));
        hints.push(Span::styled("b", Style::default().fg(Color::Cyan)));
        hints.push(Span::raw(" go back"));
    }

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        Line::default(),
        Line::from(hints),
    ])
    .wrap(Wrap { trim: false })
    .block(block);
    frame.render_widget(text, area);
}

fn render_video_list(videos: &[Video], cursor: usize, frame: &mut Frame, area: Rect, block: Block) {
    // Two columns for the highlight symbol, two for borders
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_to_width(&video.title, text_width),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    truncate_to_width(&video_meta_line(video), text_width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("► ");

    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_watch(
    video: &Video,
    related: &[Video],
    cursor: usize,
    frame: &mut Frame,
    area: Rect,
    block: Block,
) {
    let [header_area, related_area] =
        Layout::vertical([Constraint::Length(WATCH_HEADER_HEIGHT), Constraint::Min(3)])
            .areas(area);

    let mut lines = vec![
        Line::from(Span::styled(
            video.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            video_meta_line(video),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(thumbnail) = pick_thumbnail(&video.video_thumbnails) {
        lines.push(Line::from(Span::styled(
            thumbnail.url.clone(),
            Style::default().fg(Color::Blue),
        )));
    }
    lines.push(Line::default());
    lines.extend(
        video
            .description
            .lines()
            .take(DESCRIPTION_LINES as usize)
            .map(|line| Line::from(line.to_string())),
    );

    let header = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(header, header_area);

    let related_block = Block::default()
        .borders(Borders::ALL)
        .title(" Related ")
        .border_style(Style::default().fg(Color::DarkGray));
    if related.is_empty() {
        let text = Paragraph::new(Line::from(Span::styled(
            "No related videos",
            Style::default().fg(Color::DarkGray),
        )))
        .block(related_block);
        frame.render_widget(text, related_area);
    } else {
        render_video_list(related, cursor, frame, related_area, related_block);
    }
}

#[cfg(test)]
#[path = "content_render_tests.rs"]
mod content_render_tests;
