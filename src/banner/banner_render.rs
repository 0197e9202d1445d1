//! Banner card rendering
//!
//! Cards stack below the top edge, newest first in server order. Each card
//! carries its kind's accent on the border and glyph in the title; read
//! cards render dimmed. The whole banner renders nothing when the list is
//! empty - no placeholder chrome.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::banner_state::{self, BannerState};
use crate::api::Notification;
use crate::theme;
use crate::widgets::popup;

const CARD_HEIGHT: u16 = 5;
const MAX_CARD_WIDTH: u16 = 100;

/// Render the banner stack over the top of the main UI
pub fn render_banner(frame: &mut Frame, notifications: &[Notification], banner: &BannerState) {
    let visible = banner_state::visible(notifications);
    if visible.is_empty() {
        return;
    }

    let now = Instant::now();
    for (index, notification) in visible.iter().enumerate() {
        // Staggered entrance: later cards appear on later frames
        if !banner.entered(index, now) {
            continue;
        }

        let area = popup::top_stacked_card(frame.area(), index as u16, CARD_HEIGHT, MAX_CARD_WIDTH);
        if area.height < 3 {
            continue;
        }

        render_card(frame, area, notification, index == banner.selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, notification: &Notification, selected: bool) {
    popup::clear_area(frame, area);

    let accent = banner_state::accent(notification.kind);
    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let mut base_style = Style::default();
    if notification.is_read {
        base_style = base_style.add_modifier(Modifier::DIM);
    }

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", banner_state::glyph(notification.kind)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", notification.title),
            Style::default()
                .fg(theme::banner::TITLE)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(accent))
        .title(title);

    let mut lines = vec![Line::from(Span::styled(
        notification.message.clone(),
        Style::default().fg(theme::banner::MESSAGE),
    ))];

    let mut hint_spans = Vec::new();
    if let Some((_url, label)) = notification.action() {
        hint_spans.push(Span::styled(
            format!("⏎ {}", label),
            Style::default().fg(theme::banner::SELECTED_BORDER),
        ));
    }
    if selected {
        if !hint_spans.is_empty() {
            hint_spans.push(Span::raw("  "));
        }
        hint_spans.push(Span::styled(
            "x dismiss",
            Style::default().fg(theme::chrome::HINT),
        ));
    }
    if !hint_spans.is_empty() {
        lines.push(Line::from(hint_spans));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(base_style)
        .block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "banner_render_tests.rs"]
mod banner_render_tests;
