use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::api::ApiResponse;
use crate::banner;
use crate::manifest;
use crate::store::CacheKey;
use crate::wizard;

/// Timeout for event polling - keeps the UI refreshing for toast expiry,
/// entrance animation, and scheduled polls even when no key is pressed
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());
        self.poll_api_responses();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Only key presses, to avoid duplicate events on Windows
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Drive the scheduled work: the notification poll (30s, single-flight,
    /// pulled forward by invalidation) and the on-demand auth-user fetch.
    pub fn tick(&mut self, now: Instant) {
        // Invalidation pulls the next poll forward; acknowledging it keeps a
        // failing refetch on the regular cadence instead of retrying hot
        if self.store.is_stale(CacheKey::Notifications) {
            self.store.begin_refresh(CacheKey::Notifications);
            self.notification_poll.trigger();
        }
        if self.api.is_connected()
            && self.notification_poll.due(now)
            && self.api.send(crate::api::ApiRequest::FetchNotifications)
        {
            self.notification_poll.mark_started(now);
        }

        if self.store.is_stale(CacheKey::AuthUser) {
            self.store.begin_refresh(CacheKey::AuthUser);
            self.auth_refresh_pending = true;
        }
        if self.auth_refresh_pending
            && !self.auth_in_flight
            && self.api.is_connected()
            && self.api.send(crate::api::ApiRequest::FetchAuthUser)
        {
            self.auth_refresh_pending = false;
            self.auth_in_flight = true;
        }

        let visible_count = banner::visible(self.store.notifications()).len();
        self.banner.sync(visible_count);
    }

    /// Drain everything the API worker has produced since the last tick
    pub fn poll_api_responses(&mut self) {
        while let Some(response) = self.api.try_recv() {
            self.handle_api_response(response);
        }
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Notifications(result) => {
                self.notification_poll.mark_finished();
                match result {
                    Ok(notifications) => {
                        self.store.put_notifications(notifications);
                        let visible_count =
                            banner::visible(self.store.notifications()).len();
                        self.banner.sync(visible_count);
                    }
                    Err(e) => {
                        // Poll failures are silent; the next interval retries
                        log::debug!("Notification poll failed: {}", e);
                    }
                }
            }
            ApiResponse::Dismissed { id, result } => match result {
                Ok(()) => {
                    // The dismissed item disappears via refetch, not local
                    // removal
                    self.store.invalidate(CacheKey::Notifications);
                    log::debug!("Dismissed notification {}", id);
                }
                Err(_) => {
                    // Intentionally no user-visible error; the card simply
                    // stays until a later dismiss succeeds
                }
            },
            ApiResponse::MarkedRead { id, result } => match result {
                Ok(()) => {
                    self.store.invalidate(CacheKey::Notifications);
                    log::debug!("Marked notification {} read", id);
                }
                Err(_) => {}
            },
            ApiResponse::AuthUser(result) => {
                self.auth_in_flight = false;
                match result {
                    Ok(user) => self.store.put_auth_user(user),
                    Err(e) => log::debug!("Auth user fetch failed: {}", e),
                }
            }
            ApiResponse::Manifest(result) => {
                self.wizard.manifest_fetching = false;
                match result {
                    Ok(document) => match manifest::save_manifest(&document, &self.download_dir) {
                        Ok(path) => {
                            self.wizard.manifest_downloaded = true;
                            self.toast.show_success(&format!(
                                "Manifest saved to {} - now upload it to Slack",
                                path.display()
                            ));
                        }
                        Err(e) => {
                            log::debug!("Manifest write failed: {}", e);
                            self.toast.show_warning(
                                "Download failed - copy the manifest URL instead (u)",
                            );
                        }
                    },
                    Err(e) => {
                        log::debug!("Manifest fetch failed: {}", e);
                        self.toast
                            .show_warning("Download failed - copy the manifest URL instead (u)");
                    }
                }
            }
            ApiResponse::CredentialsSubmitted(result) => {
                self.wizard.submitting = false;
                match result {
                    Ok(()) => {
                        // Server-side integration state changed; the cached
                        // user must be refetched
                        self.store.invalidate(CacheKey::AuthUser);
                        if self.wizard.visible {
                            // Applies even if the user navigated back while
                            // the request was in flight
                            self.wizard.step = wizard::WizardStep::Done;
                        }
                        self.toast.show_success(
                            "Slack setup complete! Your app is configured.",
                        );
                    }
                    Err(e) => {
                        self.toast
                            .show_warning(e.user_message(wizard::CREDENTIALS_FALLBACK_ERROR));
                    }
                }
            }
            ApiResponse::ConnectionTested(result) => {
                self.wizard.testing = false;
                match result {
                    Ok(()) => {
                        self.toast.show_success(
                            "Connection test successful! Your Slack app is ready to use.",
                        );
                    }
                    Err(e) => {
                        self.toast
                            .show_warning(e.user_message(wizard::TEST_FALLBACK_ERROR));
                    }
                }
            }
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The wizard is modal and swallows everything while open
        if wizard::handle_wizard_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('s') => self.wizard.open(),
            _ => {
                banner::handle_banner_key(self, key);
            }
        }
    }

    /// Bracketed paste: only the wizard's credential fields accept text
    fn handle_paste_event(&mut self, text: &str) {
        wizard::handle_wizard_paste(self, text);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
