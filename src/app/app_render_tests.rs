//! Tests for full-app rendering

use super::*;
use crate::api::AuthUser;
use crate::test_utils::test_helpers::{notification, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::{Duration, Instant};

fn render_app_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_main_pane_chrome() {
    let mut app = test_app();

    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("taskdeck"));
    assert!(output.contains("Location: /"));
    assert!(output.contains("q quit"));
}

#[test]
fn test_slack_status_reflects_auth_user() {
    let mut app = test_app();
    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("Loading account..."));

    app.store.put_auth_user(AuthUser {
        first_name: Some("Dana".to_string()),
        slack_configured: false,
        ..AuthUser::default()
    });
    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("Signed in as Dana"));
    assert!(output.contains("not configured"));

    app.store.put_auth_user(AuthUser {
        slack_configured: true,
        ..AuthUser::default()
    });
    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("Slack integration: configured"));
}

#[test]
fn test_banner_overlays_main_pane() {
    let mut app = test_app();
    app.store.put_notifications(vec![notification("n-1")]);
    app.banner.sync(1);
    app.banner.shown_at = Some(Instant::now() - Duration::from_secs(5));

    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("title n-1"));
}

#[test]
fn test_empty_notification_list_draws_no_banner() {
    let mut app = test_app();

    let output = render_app_to_string(&mut app, 100, 30);
    assert!(!output.contains("title"));
}

#[test]
fn test_wizard_overlays_when_open() {
    let mut app = test_app();
    app.wizard.open();

    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("Slack Integration Setup"));
}

#[test]
fn test_toast_overlays_everything() {
    let mut app = test_app();
    app.toast.show("Manifest URL copied to clipboard");

    let output = render_app_to_string(&mut app, 100, 30);
    assert!(output.contains("Manifest URL copied to clipboard"));
}
