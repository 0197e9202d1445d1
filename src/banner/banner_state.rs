//! Banner selection and entrance state

use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::api::{Notification, NotificationKind};
use crate::theme;

/// At most this many notifications are shown at once
pub const MAX_VISIBLE: usize = 3;

/// Delay between consecutive cards appearing (cosmetic sequencing only)
pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(50);

/// The slice of the server list that gets rendered: the first
/// `min(n, MAX_VISIBLE)` items, server order preserved.
pub fn visible(notifications: &[Notification]) -> &[Notification] {
    &notifications[..notifications.len().min(MAX_VISIBLE)]
}

/// Accent color for a notification kind. Total - every kind maps, and
/// unknown wire values already collapsed to `Info` at deserialization.
pub fn accent(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Info => theme::banner::ACCENT_INFO,
        NotificationKind::Success => theme::banner::ACCENT_SUCCESS,
        NotificationKind::Warning => theme::banner::ACCENT_WARNING,
        NotificationKind::Urgent => theme::banner::ACCENT_URGENT,
        NotificationKind::Feature => theme::banner::ACCENT_FEATURE,
    }
}

/// Icon glyph for a notification kind
pub fn glyph(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "i",
        NotificationKind::Success => "✓",
        NotificationKind::Warning => "!",
        NotificationKind::Urgent => "‼",
        NotificationKind::Feature => "✦",
    }
}

/// Per-component banner state (the data is in the store)
#[derive(Debug, Default)]
pub struct BannerState {
    /// Index into the visible slice
    pub selected: usize,
    /// When the banner last went from empty to non-empty; entrance
    /// staggering is measured from here
    pub shown_at: Option<Instant>,
}

impl BannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the current visible count: clamp the selection and
    /// restart the entrance animation when the banner reappears.
    pub fn sync(&mut self, visible_count: usize) {
        if visible_count == 0 {
            self.selected = 0;
            self.shown_at = None;
            return;
        }
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
        if self.selected >= visible_count {
            self.selected = visible_count - 1;
        }
    }

    pub fn select_next(&mut self, visible_count: usize) {
        if visible_count > 0 && self.selected + 1 < visible_count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Has the card at `index` finished its staggered entrance?
    pub fn entered(&self, index: usize, now: Instant) -> bool {
        match self.shown_at {
            Some(shown_at) => now.duration_since(shown_at) >= ENTRANCE_STAGGER * index as u32,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "banner_state_tests.rs"]
mod banner_state_tests;
