//! Tests for wizard key handling and the submission flow

use super::*;
use crate::api::{ApiError, ApiResponse};
use crate::store::CacheKey;
use crate::test_utils::test_helpers::{app_with_api, key, key_with_mods};
use crate::toast::ToastKind;

fn open_at_credentials(app: &mut App) {
    app.wizard.open();
    app.wizard.step = WizardStep::Credentials;
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_wizard_key(app, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_keys_pass_through_when_wizard_closed() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    assert!(!handle_wizard_key(&mut app, key(KeyCode::Enter)));
}

#[test]
fn test_esc_closes_at_every_step() {
    let (mut app, _request_rx, _response_tx) = app_with_api();

    for step in [
        WizardStep::Welcome,
        WizardStep::CreateApp,
        WizardStep::Credentials,
        WizardStep::Done,
    ] {
        app.wizard.open();
        app.wizard.step = step;
        assert!(handle_wizard_key(&mut app, key(KeyCode::Esc)));
        assert!(!app.wizard.visible, "Esc should close from {:?}", step);
    }
}

#[test]
fn test_welcome_advances_on_enter_only() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    app.wizard.open();

    handle_wizard_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.wizard.step, WizardStep::Welcome);

    handle_wizard_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.wizard.step, WizardStep::CreateApp);
}

#[test]
fn test_create_app_navigation() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    app.wizard.open();
    app.wizard.step = WizardStep::CreateApp;

    handle_wizard_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.wizard.step, WizardStep::Welcome);

    app.wizard.step = WizardStep::CreateApp;
    handle_wizard_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.wizard.step, WizardStep::Credentials);
}

#[test]
fn test_download_manifest_is_single_flight() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    app.wizard.open();
    app.wizard.step = WizardStep::CreateApp;

    handle_wizard_key(&mut app, key(KeyCode::Char('d')));
    handle_wizard_key(&mut app, key(KeyCode::Char('d')));

    assert_eq!(request_rx.try_recv().unwrap(), ApiRequest::FetchManifest);
    assert!(request_rx.try_recv().is_err(), "second fetch suppressed");
    assert!(app.wizard.manifest_fetching);
}

#[test]
fn test_copy_manifest_url_shows_confirmation() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    // OSC 52 writes to stdout, which always succeeds in tests
    app.clipboard_backend = crate::config::ClipboardBackend::Osc52;
    app.wizard.open();
    app.wizard.step = WizardStep::CreateApp;

    handle_wizard_key(&mut app, key(KeyCode::Char('u')));

    let toast = app.toast.current().expect("confirmation toast");
    assert!(toast.message.contains("Manifest URL copied"));
}

#[test]
fn test_typing_fills_focused_field() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);

    type_str(&mut app, "123.456");
    handle_wizard_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, "s3cret");

    assert_eq!(app.wizard.client_id_value(), "123.456");
    assert_eq!(app.wizard.client_secret_value(), "s3cret");
}

#[test]
fn test_paste_goes_to_focused_field_and_strips_newlines() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    handle_wizard_key(&mut app, key(KeyCode::Tab));

    assert!(handle_wizard_paste(&mut app, "abc\ndef\r\n"));
    assert_eq!(app.wizard.client_secret_value(), "abcdef");
}

#[test]
fn test_empty_credentials_issue_no_request() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);

    handle_wizard_key(&mut app, key(KeyCode::Enter));

    assert!(request_rx.try_recv().is_err(), "no request expected");
    assert_eq!(app.wizard.step, WizardStep::Credentials);
    assert_eq!(
        app.toast.current().unwrap().kind,
        ToastKind::Warning
    );
}

#[test]
fn test_whitespace_credentials_issue_no_request() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);

    type_str(&mut app, "   ");
    handle_wizard_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, " ");
    handle_wizard_key(&mut app, key(KeyCode::Enter));

    assert!(request_rx.try_recv().is_err());
    assert_eq!(app.wizard.step, WizardStep::Credentials);
}

#[test]
fn test_submit_sends_trimmed_credentials() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);

    type_str(&mut app, "  123.456  ");
    handle_wizard_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, " s3cret ");
    handle_wizard_key(&mut app, key(KeyCode::Enter));

    assert_eq!(
        request_rx.try_recv().unwrap(),
        ApiRequest::SubmitCredentials {
            client_id: "123.456".to_string(),
            client_secret: "s3cret".to_string(),
        }
    );
    assert!(app.wizard.submitting);
}

#[test]
fn test_duplicate_submit_blocked_while_pending() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);

    type_str(&mut app, "123.456");
    handle_wizard_key(&mut app, key(KeyCode::Tab));
    type_str(&mut app, "s3cret");
    handle_wizard_key(&mut app, key(KeyCode::Enter));
    handle_wizard_key(&mut app, key(KeyCode::Enter));

    assert!(request_rx.try_recv().is_ok());
    assert!(request_rx.try_recv().is_err(), "second submit suppressed");
}

#[test]
fn test_submit_success_advances_and_invalidates_auth_once() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    app.wizard.submitting = true;
    // Auth state was loaded earlier and is currently fresh
    app.store.put_auth_user(crate::api::AuthUser::default());

    app.handle_api_response(ApiResponse::CredentialsSubmitted(Ok(())));

    assert_eq!(app.wizard.step, WizardStep::Done);
    assert!(!app.wizard.submitting);
    assert!(app.store.is_stale(CacheKey::AuthUser));
    assert_eq!(app.toast.current().unwrap().kind, ToastKind::Success);
}

#[test]
fn test_submit_success_after_back_navigation_still_advances() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    app.wizard.submitting = true;

    // User went back to the instructions while the request was in flight
    handle_wizard_key(&mut app, key_with_mods(KeyCode::Char('b'), KeyModifiers::CONTROL));
    assert_eq!(app.wizard.step, WizardStep::CreateApp);

    app.handle_api_response(ApiResponse::CredentialsSubmitted(Ok(())));
    assert_eq!(app.wizard.step, WizardStep::Done);
}

#[test]
fn test_submit_success_after_close_does_not_reopen() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    app.wizard.submitting = true;

    handle_wizard_key(&mut app, key(KeyCode::Esc));
    app.handle_api_response(ApiResponse::CredentialsSubmitted(Ok(())));

    assert!(!app.wizard.visible);
    assert_eq!(app.wizard.step, WizardStep::Welcome);
    // The server-side change still invalidates cached auth state
    assert!(app.store.is_stale(CacheKey::AuthUser));
}

#[test]
fn test_submit_failure_keeps_step_and_shows_server_message() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    app.wizard.submitting = true;

    app.handle_api_response(ApiResponse::CredentialsSubmitted(Err(ApiError::Status {
        code: 400,
        message: Some("Client ID must start with numbers".to_string()),
    })));

    assert_eq!(app.wizard.step, WizardStep::Credentials);
    assert!(!app.wizard.submitting);
    assert_eq!(
        app.toast.current().unwrap().message,
        "Client ID must start with numbers"
    );
    assert!(!app.store.is_stale(CacheKey::AuthUser));
}

#[test]
fn test_submit_failure_without_message_uses_fallback() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    app.wizard.submitting = true;

    app.handle_api_response(ApiResponse::CredentialsSubmitted(Err(ApiError::Network(
        "connection refused".to_string(),
    ))));

    assert_eq!(
        app.toast.current().unwrap().message,
        CREDENTIALS_FALLBACK_ERROR
    );
}

#[test]
fn test_done_step_is_terminal() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    app.wizard.open();
    app.wizard.step = WizardStep::Done;

    handle_wizard_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.wizard.step, WizardStep::Done);
}

#[test]
fn test_test_connection_single_flight_and_outcomes() {
    let (mut app, request_rx, _response_tx) = app_with_api();
    app.wizard.open();
    app.wizard.step = WizardStep::Done;

    handle_wizard_key(&mut app, key(KeyCode::Char('t')));
    handle_wizard_key(&mut app, key(KeyCode::Char('t')));
    assert_eq!(request_rx.try_recv().unwrap(), ApiRequest::TestConnection);
    assert!(request_rx.try_recv().is_err(), "second test suppressed");

    app.handle_api_response(ApiResponse::ConnectionTested(Ok(())));
    assert!(!app.wizard.testing);
    assert_eq!(app.wizard.step, WizardStep::Done, "test never changes step");
    assert_eq!(app.toast.current().unwrap().kind, ToastKind::Success);

    app.wizard.testing = true;
    app.handle_api_response(ApiResponse::ConnectionTested(Err(ApiError::Status {
        code: 502,
        message: None,
    })));
    assert_eq!(app.toast.current().unwrap().message, TEST_FALLBACK_ERROR);
    assert_eq!(app.wizard.step, WizardStep::Done);
}

#[test]
fn test_finish_runs_success_hook_then_closes() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    app.wizard.open();
    app.wizard.step = WizardStep::Done;

    handle_wizard_key(&mut app, key(KeyCode::Enter));

    assert!(app.slack_setup_completed);
    assert!(!app.wizard.visible);
}

#[test]
fn test_reopen_after_partial_run_resets() {
    let (mut app, _request_rx, _response_tx) = app_with_api();
    open_at_credentials(&mut app);
    type_str(&mut app, "123.456");

    handle_wizard_key(&mut app, key(KeyCode::Esc));
    app.wizard.open();

    assert_eq!(app.wizard.step, WizardStep::Welcome);
    assert_eq!(app.wizard.client_id_value(), "");
    assert_eq!(app.wizard.client_secret_value(), "");
}
