//! Wizard key handling
//!
//! The wizard is modal: while visible it swallows every key. Esc closes at
//! any step without persisting anything; everything else routes to the
//! current step.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::wizard_state::WizardStep;
use crate::api::ApiRequest;
use crate::app::App;
use crate::clipboard;
use crate::manifest;

/// Shown when credential submission fails without a server message
pub const CREDENTIALS_FALLBACK_ERROR: &str =
    "Failed to save Slack credentials. Please try again.";

/// Shown when the connection test fails without a server message
pub const TEST_FALLBACK_ERROR: &str = "Please check your Slack app configuration.";

pub fn handle_wizard_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.wizard.visible {
        return false;
    }

    // Closing is always available and discards partial state
    if key.code == KeyCode::Esc {
        app.wizard.close();
        return true;
    }

    match app.wizard.step {
        WizardStep::Welcome => handle_welcome_key(app, key),
        WizardStep::CreateApp => handle_create_app_key(app, key),
        WizardStep::Credentials => handle_credentials_key(app, key),
        WizardStep::Done => handle_done_key(app, key),
    }

    true
}

/// Bracketed paste lands in the focused credential field
pub fn handle_wizard_paste(app: &mut App, text: &str) -> bool {
    if !app.wizard.visible || app.wizard.step != WizardStep::Credentials {
        return false;
    }

    // Fields are single-line; strip any line breaks from the paste
    let sanitized: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    app.wizard.focused_field_mut().insert_str(&sanitized);
    true
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.wizard.advance();
    }
}

fn handle_create_app_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.wizard.advance(),
        KeyCode::Backspace | KeyCode::Char('b') => app.wizard.retreat(),
        KeyCode::Char('d') => download_manifest(app),
        KeyCode::Char('u') => {
            let url = manifest::manifest_url(&app.base_url);
            copy_url(app, &url, "Manifest URL copied to clipboard");
        }
        KeyCode::Char('r') => {
            let url = manifest::oauth_callback_url(&app.base_url);
            copy_url(app, &url, "Redirect URL copied to clipboard");
        }
        _ => {}
    }
}

fn handle_credentials_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Back does not cancel an in-flight submission; a success that
        // resolves later still advances to the final step
        app.wizard.retreat();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.wizard.field_focus = app.wizard.field_focus.toggle();
        }
        KeyCode::Enter => submit_credentials(app),
        _ => {
            app.wizard.focused_field_mut().input(key);
        }
    }
}

fn handle_done_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('t') => test_connection(app),
        KeyCode::Enter | KeyCode::Char('f') => finish(app),
        _ => {}
    }
}

/// Fetch the manifest document; the file is written when the response
/// lands. Single-flight, and the flag it sets afterwards is cosmetic.
fn download_manifest(app: &mut App) {
    if app.wizard.manifest_fetching {
        return;
    }
    if app.api.send(ApiRequest::FetchManifest) {
        app.wizard.manifest_fetching = true;
    }
}

fn copy_url(app: &mut App, url: &str, confirmation: &str) {
    match clipboard::copy_to_clipboard(url, app.clipboard_backend) {
        Ok(()) => app.toast.show(confirmation),
        Err(_) => app
            .toast
            .show_warning(&format!("Copy failed - copy it manually: {}", url)),
    }
}

/// Validate and submit the credentials.
///
/// Both fields must be non-empty after trimming, otherwise no request is
/// made at all. Duplicate submissions are blocked while one is pending.
fn submit_credentials(app: &mut App) {
    if app.wizard.submitting {
        return;
    }

    let client_id = app.wizard.client_id_value().trim().to_string();
    let client_secret = app.wizard.client_secret_value().trim().to_string();

    if client_id.is_empty() || client_secret.is_empty() {
        app.toast
            .show_warning("Please enter both Client ID and Client Secret");
        return;
    }

    if app.api.send(ApiRequest::SubmitCredentials {
        client_id,
        client_secret,
    }) {
        app.wizard.submitting = true;
    }
}

fn test_connection(app: &mut App) {
    if app.wizard.testing {
        return;
    }
    if app.api.send(ApiRequest::TestConnection) {
        app.wizard.testing = true;
    }
}

/// Success hook first, then close - the host reacts to a completed setup
/// before the dialog disappears.
fn finish(app: &mut App) {
    app.complete_slack_setup();
    app.wizard.close();
}

#[cfg(test)]
#[path = "wizard_events_tests.rs"]
mod wizard_events_tests;
