//! API data model and channel types
//!
//! Wire types are server-owned; deserialization is tolerant of fields this
//! client does not use.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use serde::Deserialize;
use thiserror::Error;

/// Notification category - determines icon and accent color only
///
/// Unknown categories sent by a newer server deserialize to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(from = "String")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Urgent,
    Feature,
}

impl From<String> for NotificationKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "urgent" => NotificationKind::Urgent,
            "feature" => NotificationKind::Feature,
            _ => NotificationKind::Info,
        }
    }
}

/// A user-facing notification issued by the server
///
/// The client only reads these, marks them read, or dismisses them;
/// dismissal is server-side state, not local deletion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub action_label: Option<String>,
}

impl Notification {
    /// The navigation action, present only when the server sent both halves
    /// of the url/label pair.
    pub fn action(&self) -> Option<(&str, &str)> {
        match (self.action_url.as_deref(), self.action_label.as_deref()) {
            (Some(url), Some(label)) => Some((url, label)),
            _ => None,
        }
    }
}

/// The signed-in user, read to display integration status
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub slack_configured: bool,
}

/// Errors from the request layer
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {code}")]
    Status { code: u16, message: Option<String> },

    #[error("Malformed server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided message when present, else the given fallback.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.is_empty() => m,
            _ => fallback,
        }
    }
}

/// Requests sent to the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    FetchNotifications,
    DismissNotification { id: String },
    MarkNotificationRead { id: String },
    FetchAuthUser,
    FetchManifest,
    SubmitCredentials { client_id: String, client_secret: String },
    TestConnection,
}

/// Responses received from the API worker thread
#[derive(Debug)]
pub enum ApiResponse {
    Notifications(Result<Vec<Notification>, ApiError>),
    Dismissed {
        id: String,
        result: Result<(), ApiError>,
    },
    MarkedRead {
        id: String,
        result: Result<(), ApiError>,
    },
    AuthUser(Result<AuthUser, ApiError>),
    Manifest(Result<serde_json::Value, ApiError>),
    CredentialsSubmitted(Result<(), ApiError>),
    ConnectionTested(Result<(), ApiError>),
}

/// Channel handles for talking to the API worker
///
/// Channels are absent until the worker is spawned; sends before that are
/// dropped (and logged) rather than failing the UI.
#[derive(Default)]
pub struct ApiHandle {
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
}

impl ApiHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(&mut self, request_tx: Sender<ApiRequest>, response_rx: Receiver<ApiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    /// Send a request to the worker. Returns false if no worker is attached
    /// or the worker has gone away.
    pub fn send(&self, request: ApiRequest) -> bool {
        match &self.request_tx {
            Some(tx) => match tx.send(request) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("API worker is gone, dropping request: {:?}", e.0);
                    false
                }
            },
            None => {
                log::debug!("No API worker attached, dropping request");
                false
            }
        }
    }

    /// Drain one pending response, if any.
    pub fn try_recv(&self) -> Option<ApiResponse> {
        let rx = self.response_rx.as_ref()?;
        match rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
