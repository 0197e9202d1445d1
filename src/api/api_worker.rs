//! API worker thread
//!
//! Handles server requests in a background thread so the UI never blocks.
//! Receives requests via channel, makes HTTP calls to the Taskdeck server,
//! and sends responses back to the main thread.
//!
//! Uses a current-thread tokio runtime; requests are processed one at a
//! time in arrival order. There is no cancellation or timeout - an
//! abandoned view simply ignores whatever response eventually lands.

use std::sync::mpsc::{Receiver, Sender};

use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api_types::{ApiError, ApiRequest, ApiResponse, AuthUser, Notification};

const NOTIFICATIONS_PATH: &str = "/api/notifications";
const AUTH_USER_PATH: &str = "/api/auth/user";
const MANIFEST_PATH: &str = "/api/slack/manifest";
const SETUP_CREDENTIALS_PATH: &str = "/api/slack/setup-credentials";
const TEST_CONNECTION_PATH: &str = "/api/slack/test-connection";

/// Spawn the API worker thread
///
/// Creates a background thread with a tokio runtime that listens for
/// requests on the request channel and sends results back on the response
/// channel. The thread exits when the request channel closes.
pub fn spawn_worker(
    base_url: Url,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");

        rt.block_on(worker_loop(base_url, request_rx, response_tx));
    });
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Blocking `recv()` on the request channel is fine in a dedicated thread.
pub(crate) async fn worker_loop(
    base_url: Url,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let client = Client::new();

    while let Ok(request) = request_rx.recv() {
        log::debug!("API worker dispatching {:?}", request);
        let response = dispatch(&client, &base_url, request).await;
        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }
}

async fn dispatch(client: &Client, base_url: &Url, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FetchNotifications => {
            let result = match endpoint(base_url, NOTIFICATIONS_PATH) {
                Ok(url) => get_json::<Vec<Notification>>(client, url).await,
                Err(e) => Err(e),
            };
            ApiResponse::Notifications(result)
        }
        ApiRequest::DismissNotification { id } => {
            let path = format!("{}/{}/dismiss", NOTIFICATIONS_PATH, id);
            let result = match endpoint(base_url, &path) {
                Ok(url) => patch_empty(client, url).await,
                Err(e) => Err(e),
            };
            if let Err(ref e) = result {
                // Mutation failures are intentionally not surfaced in the UI
                log::debug!("Dismiss failed for notification {}: {}", id, e);
            }
            ApiResponse::Dismissed { id, result }
        }
        ApiRequest::MarkNotificationRead { id } => {
            let path = format!("{}/{}/read", NOTIFICATIONS_PATH, id);
            let result = match endpoint(base_url, &path) {
                Ok(url) => patch_empty(client, url).await,
                Err(e) => Err(e),
            };
            if let Err(ref e) = result {
                log::debug!("Mark-read failed for notification {}: {}", id, e);
            }
            ApiResponse::MarkedRead { id, result }
        }
        ApiRequest::FetchAuthUser => {
            let result = match endpoint(base_url, AUTH_USER_PATH) {
                Ok(url) => get_json::<AuthUser>(client, url).await,
                Err(e) => Err(e),
            };
            ApiResponse::AuthUser(result)
        }
        ApiRequest::FetchManifest => {
            let result = match endpoint(base_url, MANIFEST_PATH) {
                Ok(url) => get_json::<serde_json::Value>(client, url).await,
                Err(e) => Err(e),
            };
            ApiResponse::Manifest(result)
        }
        ApiRequest::SubmitCredentials {
            client_id,
            client_secret,
        } => {
            let body = serde_json::json!({
                "slackClientId": client_id,
                "slackClientSecret": client_secret,
            });
            let result = match endpoint(base_url, SETUP_CREDENTIALS_PATH) {
                Ok(url) => post_json(client, url, &body).await,
                Err(e) => Err(e),
            };
            ApiResponse::CredentialsSubmitted(result)
        }
        ApiRequest::TestConnection => {
            let result = match endpoint(base_url, TEST_CONNECTION_PATH) {
                Ok(url) => post_json(client, url, &serde_json::json!({})).await,
                Err(e) => Err(e),
            };
            ApiResponse::ConnectionTested(result)
        }
    }
}

fn endpoint(base_url: &Url, path: &str) -> Result<Url, ApiError> {
    base_url
        .join(path)
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, ApiError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn patch_empty(client: &Client, url: Url) -> Result<(), ApiError> {
    let response = client
        .patch(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

async fn post_json(client: &Client, url: Url, body: &serde_json::Value) -> Result<(), ApiError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

/// Shape of the server's JSON error body
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map non-2xx responses to `ApiError::Status`, pulling the human-readable
/// message out of a JSON `{"message": ...}` body when the server sent one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

    log::debug!("Server returned {} for request: {:?}", code, message);
    Err(ApiError::Status { code, message })
}

#[cfg(test)]
#[path = "api_worker_tests.rs"]
mod api_worker_tests;
