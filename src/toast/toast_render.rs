//! Toast rendering
//!
//! Renders the transient toast overlay in the bottom-right corner, away
//! from the banner stack at the top.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_state::ToastState;
use crate::widgets::popup;

/// Render the toast overlay in the bottom-right corner of the frame
///
/// Call after rendering the rest of the UI so the toast appears on top.
pub fn render_toast(frame: &mut Frame, toast: &mut ToastState) {
    toast.clear_if_expired();

    let toast = match toast.current() {
        Some(t) => t,
        None => return,
    };

    let message = &toast.message;
    let style = &toast.style;

    // message + 2 padding chars each side + 2 border columns
    let toast_width = message.chars().count() as u16 + 4;
    let toast_height = 3;

    let area = popup::bottom_right_popup(frame.area(), toast_width, toast_height);
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
