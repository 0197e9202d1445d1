//! Server API module
//!
//! All HTTP traffic to the Taskdeck server goes through a background worker
//! thread. The UI thread sends `ApiRequest` values over a channel and drains
//! `ApiResponse` values each tick; it never blocks on the network.

pub mod api_types;
pub mod api_worker;

pub use api_types::{
    ApiError, ApiHandle, ApiRequest, ApiResponse, AuthUser, Notification, NotificationKind,
};
pub use api_worker::spawn_worker;
