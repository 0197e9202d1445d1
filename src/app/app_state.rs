use std::path::PathBuf;

use reqwest::Url;

use crate::api::ApiHandle;
use crate::banner::BannerState;
use crate::config::{ClipboardBackend, Config};
use crate::manifest;
use crate::schedule::{NOTIFICATION_POLL_INTERVAL, PollTask};
use crate::store::Store;
use crate::toast::ToastState;
use crate::wizard::WizardState;

pub struct App {
    pub store: Store,
    pub banner: BannerState,
    pub wizard: WizardState,
    pub toast: ToastState,
    pub api: ApiHandle,
    pub notification_poll: PollTask,
    /// Auth-user fetch in flight (on-demand, not polled)
    pub auth_in_flight: bool,
    /// An auth-user refetch is wanted (startup, or after invalidation)
    pub auth_refresh_pending: bool,
    pub clipboard_backend: ClipboardBackend,
    pub base_url: Url,
    pub download_dir: PathBuf,
    /// Current in-app location; notification actions navigate here
    pub location: String,
    /// Set by the wizard's finish action before the dialog closes
    pub slack_setup_completed: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(base_url: Url, config: &Config) -> Self {
        Self {
            store: Store::new(),
            banner: BannerState::new(),
            wizard: WizardState::new(),
            toast: ToastState::new(),
            api: ApiHandle::new(),
            notification_poll: PollTask::new(NOTIFICATION_POLL_INTERVAL),
            auth_in_flight: false,
            auth_refresh_pending: true,
            clipboard_backend: config.clipboard.backend,
            base_url,
            download_dir: manifest::download_dir(config.downloads.dir.as_deref()),
            location: "/".to_string(),
            slack_setup_completed: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigate(&mut self, url: &str) {
        self.location = url.to_string();
    }

    /// Success hook invoked by the wizard's finish action, before close.
    pub fn complete_slack_setup(&mut self) {
        self.slack_setup_completed = true;
        self.toast
            .show_success("Slack is set up - connect your workspace from the dashboard");
    }
}
