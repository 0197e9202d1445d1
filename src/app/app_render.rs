use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::banner;
use crate::theme;
use crate::toast;
use crate::wizard;

impl App {
    /// Render the UI: main pane first, then the overlays in z-order -
    /// banner cards, wizard dialog, toast.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),    // Main pane
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        let main_area = layout[0];
        let help_area = layout[1];

        self.render_main_pane(frame, main_area);
        self.render_help_line(frame, help_area);

        banner::render_banner(frame, self.store.notifications(), &self.banner);

        if self.wizard.visible {
            wizard::render_wizard(frame, &mut self.wizard, &self.base_url);
        }

        toast::render_toast(frame, &mut self.toast);
    }

    fn render_main_pane(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::chrome::BORDER))
            .title(Line::from(Span::styled(
                " taskdeck ",
                Style::default()
                    .fg(theme::chrome::TITLE)
                    .add_modifier(Modifier::BOLD),
            )));

        let greeting = match self.store.auth_user().and_then(|u| u.first_name.clone()) {
            Some(name) => format!("Signed in as {}", name),
            None => "Signed in".to_string(),
        };

        let slack_line = match self.store.auth_user() {
            Some(user) if user.slack_configured => Line::from(vec![
                Span::raw("Slack integration: "),
                Span::styled("configured", Style::default().fg(theme::chrome::STATUS_OK)),
            ]),
            Some(_) => Line::from(vec![
                Span::raw("Slack integration: "),
                Span::styled(
                    "not configured (press s to set up)",
                    Style::default().fg(theme::chrome::STATUS_PENDING),
                ),
            ]),
            None => Line::from(Span::styled(
                "Loading account...",
                Style::default().fg(theme::chrome::HINT),
            )),
        };

        let lines = vec![
            Line::default(),
            Line::from(Span::raw(greeting)),
            Line::from(vec![
                Span::raw("Location: "),
                Span::styled(
                    self.location.clone(),
                    Style::default().fg(theme::chrome::TITLE),
                ),
            ]),
            slack_line,
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let hints = " s slack setup · ↑/↓ select notification · ⏎ open · x dismiss · q quit";
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hints,
                Style::default().fg(theme::chrome::HINT),
            ))),
            area,
        );
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
