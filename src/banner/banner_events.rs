//! Banner key handling
//!
//! Active only when no modal is open. Selection moves between the visible
//! cards; `x` dismisses, Enter activates the card's navigation action.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::banner_state;
use crate::api::{ApiRequest, Notification};
use crate::app::App;

pub fn handle_banner_key(app: &mut App, key: KeyEvent) -> bool {
    let visible_count = banner_state::visible(app.store.notifications()).len();
    if visible_count == 0 {
        return false;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.banner.select_next(visible_count);
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.banner.select_previous();
            true
        }
        KeyCode::Char('x') => {
            dismiss_selected(app);
            true
        }
        KeyCode::Enter => {
            activate_selected(app);
            true
        }
        _ => false,
    }
}

fn selected_notification(app: &App) -> Option<Notification> {
    banner_state::visible(app.store.notifications())
        .get(app.banner.selected)
        .cloned()
}

/// Issue a dismiss for the selected card. The card stays on screen until
/// the server confirms and the subsequent refetch drops it - there is no
/// optimistic removal.
fn dismiss_selected(app: &mut App) {
    let Some(notification) = selected_notification(app) else {
        return;
    };

    app.api.send(ApiRequest::DismissNotification {
        id: notification.id,
    });
}

/// Activate the selected card's action: mark it read (if unread), then
/// navigate to its URL. Cards without an action do nothing.
fn activate_selected(app: &mut App) {
    let Some(notification) = selected_notification(app) else {
        return;
    };
    let Some((url, _label)) = notification.action() else {
        return;
    };
    let url = url.to_string();

    if !notification.is_read {
        app.api.send(ApiRequest::MarkNotificationRead {
            id: notification.id.clone(),
        });
    }
    app.navigate(&url);
}

#[cfg(test)]
#[path = "banner_events_tests.rs"]
mod banner_events_tests;
