//! Wizard dialog rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use reqwest::Url;

use super::wizard_state::{CredentialField, WizardState, WizardStep};
use crate::manifest;
use crate::theme;
use crate::widgets::popup;

const DIALOG_WIDTH: u16 = 74;
const DIALOG_HEIGHT: u16 = 22;

/// Render the wizard dialog centered over the main UI
pub fn render_wizard(frame: &mut Frame, wizard: &mut WizardState, base_url: &Url) {
    if !wizard.visible {
        return;
    }

    let area = popup::centered_popup(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    if area.width < 20 || area.height < 8 {
        return;
    }

    popup::clear_area(frame, area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::dialog::BORDER))
        .title(Line::from(Span::styled(
            " Slack Integration Setup ",
            Style::default()
                .fg(theme::dialog::HEADING)
                .add_modifier(Modifier::BOLD),
        )));

    // The completion step drops the progress indicator
    let step = wizard.step;
    if step.number() <= 3 {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" Step {} of 3 ", step.number()),
                Style::default().fg(theme::dialog::STEP_LABEL),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Rect {
        x: inner.x + 2,
        y: inner.y + 1,
        width: inner.width.saturating_sub(4),
        height: inner.height.saturating_sub(1),
    };

    match step {
        WizardStep::Welcome => render_welcome(frame, content),
        WizardStep::CreateApp => render_create_app(frame, content, wizard, base_url),
        WizardStep::Credentials => render_credentials(frame, content, wizard),
        WizardStep::Done => render_done(frame, content, wizard),
    }
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme::dialog::HEADING)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(theme::dialog::BODY)))
}

fn hint(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(theme::chrome::HINT)))
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        heading("Connect Slack in 3 Simple Steps"),
        Line::default(),
        body("Just follow along - it takes about 3 minutes."),
        Line::default(),
        body("  1. Create the Slack app           (1 min)"),
        body("  2. Get your app credentials       (1 min)"),
        body("  3. Connect and done               (1 min)"),
        Line::default(),
        body("We'll guide you through each step with clear instructions."),
        Line::default(),
        hint("Enter start setup · Esc close"),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_create_app(frame: &mut Frame, area: Rect, wizard: &WizardState, base_url: &Url) {
    let download_line = if wizard.manifest_fetching {
        Line::from(Span::styled(
            "  d  Downloading manifest...",
            Style::default().fg(theme::chrome::STATUS_PENDING),
        ))
    } else if wizard.manifest_downloaded {
        Line::from(Span::styled(
            "  d  Downloaded - now upload it to Slack",
            Style::default().fg(theme::dialog::DONE_MARK),
        ))
    } else {
        body("  d  Download the pre-configured manifest file")
    };

    let lines = vec![
        heading("Create Your Slack App"),
        Line::default(),
        body("  1. Open https://api.slack.com/apps?new_app=1 in your browser"),
        body("  2. Pick \"From an app manifest\" and choose your workspace"),
        body("  3. Upload the manifest file, then Next and Create"),
        Line::default(),
        download_line,
        Line::from(vec![
            Span::styled("  u  Copy manifest URL   ", Style::default().fg(theme::dialog::BODY)),
            Span::styled(
                manifest::manifest_url(base_url),
                Style::default().fg(theme::dialog::URL),
            ),
        ]),
        Line::from(vec![
            Span::styled("  r  Copy redirect URL   ", Style::default().fg(theme::dialog::BODY)),
            Span::styled(
                manifest::oauth_callback_url(base_url),
                Style::default().fg(theme::dialog::URL),
            ),
        ]),
        Line::default(),
        hint("Enter app created, continue · Backspace back · Esc close"),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_credentials(frame: &mut Frame, area: Rect, wizard: &mut WizardState) {
    let layout = Layout::vertical([
        Constraint::Length(1), // heading
        Constraint::Length(1),
        Constraint::Length(3), // client id field
        Constraint::Length(3), // client secret field
        Constraint::Length(1),
        Constraint::Length(1), // status
        Constraint::Length(1), // hints
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(heading("Enter Your App Credentials")),
        layout[0],
    );

    let focus = wizard.field_focus;
    wizard.client_id.set_block(field_block(
        " Client ID ",
        focus == CredentialField::ClientId,
    ));
    wizard.client_secret.set_block(field_block(
        " Client Secret ",
        focus == CredentialField::ClientSecret,
    ));

    frame.render_widget(&wizard.client_id, layout[2]);
    frame.render_widget(&wizard.client_secret, layout[3]);

    let status = if wizard.submitting {
        Line::from(Span::styled(
            "Saving...",
            Style::default().fg(theme::chrome::STATUS_PENDING),
        ))
    } else if wizard.can_submit() {
        Line::from(Span::styled(
            "Enter save & continue",
            Style::default().fg(theme::dialog::SUBMIT_READY),
        ))
    } else {
        Line::from(Span::styled(
            "Fill in both fields to continue",
            Style::default().fg(theme::dialog::SUBMIT_DISABLED),
        ))
    };
    frame.render_widget(Paragraph::new(status), layout[5]);

    frame.render_widget(
        Paragraph::new(hint("Tab switch field · Ctrl+B back · Esc close")),
        layout[6],
    );
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let color = if focused {
        theme::dialog::FIELD_FOCUSED
    } else {
        theme::dialog::FIELD_UNFOCUSED
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}

fn render_done(frame: &mut Frame, area: Rect, wizard: &WizardState) {
    let test_line = if wizard.testing {
        Line::from(Span::styled(
            "  Testing connection...",
            Style::default().fg(theme::chrome::STATUS_PENDING),
        ))
    } else {
        body("  t  Test connection")
    };

    let lines = vec![
        Line::from(Span::styled(
            "✓ Setup Complete!",
            Style::default()
                .fg(theme::dialog::DONE_MARK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        body("Your Slack app is configured and ready to connect."),
        Line::default(),
        body("Next steps:"),
        body("  • Connect your workspace from the dashboard"),
        body("  • Use /tasks commands in your Slack channels"),
        body("  • Manage tasks directly from Slack"),
        Line::default(),
        test_line,
        Line::default(),
        hint("Enter finish · Esc close"),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
#[path = "wizard_render_tests.rs"]
mod wizard_render_tests;
