//! Toast state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Toast kind - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Info (gray) - short duration - for confirmations like "Copied!"
    #[default]
    Info,
    /// Success (green) - medium duration - for completed operations
    Success,
    /// Warning (yellow) - long duration - for failures the user can retry
    Warning,
}

impl ToastKind {
    fn duration(self) -> Duration {
        match self {
            ToastKind::Info => Duration::from_millis(2000),
            ToastKind::Success => Duration::from_millis(3000),
            ToastKind::Warning => Duration::from_millis(6000),
        }
    }

    fn style(self) -> ToastStyle {
        match self {
            ToastKind::Info => ToastStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            ToastKind::Success => ToastStyle {
                fg: Color::Black,
                bg: Color::Green,
                border: Color::LightGreen,
            },
            ToastKind::Warning => ToastStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

impl Default for ToastStyle {
    fn default() -> Self {
        ToastKind::Info.style()
    }
}

/// A single toast with message, timing, and style
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: &str) -> Self {
        Self::with_kind(message, ToastKind::Info)
    }

    pub fn with_kind(message: &str, kind: ToastKind) -> Self {
        Self {
            message: message.to_string(),
            style: kind.style(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Toast state manager for the application
///
/// Holds at most one toast; showing a new one replaces the current.
#[derive(Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info toast (gray, 2s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Toast::new(message));
    }

    pub fn show_with_kind(&mut self, message: &str, kind: ToastKind) {
        self.current = Some(Toast::with_kind(message, kind));
    }

    /// Show a success toast (green, 3s)
    pub fn show_success(&mut self, message: &str) {
        self.show_with_kind(message, ToastKind::Success);
    }

    /// Show a warning toast (yellow, 6s)
    pub fn show_warning(&mut self, message: &str) {
        self.show_with_kind(message, ToastKind::Warning);
    }

    /// Clear expired toast, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref toast) = self.current
            && toast.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Get current toast message if visible (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_info_toast() {
        let toast = Toast::new("Copied!");
        assert_eq!(toast.message, "Copied!");
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.duration, Duration::from_millis(2000));
        assert_eq!(toast.style.bg, Color::DarkGray);
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_success_toast() {
        let toast = Toast::with_kind("Setup complete", ToastKind::Success);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.duration, Duration::from_millis(3000));
        assert_eq!(toast.style.bg, Color::Green);
    }

    #[test]
    fn test_warning_toast() {
        let toast = Toast::with_kind("Copy failed", ToastKind::Warning);
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(toast.duration, Duration::from_millis(6000));
        assert_eq!(toast.style.bg, Color::Yellow);
    }

    #[test]
    fn test_toast_expiration() {
        let mut toast = Toast::new("Expiring");
        toast.duration = Duration::from_millis(10);
        assert!(!toast.is_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_toast_state_show() {
        let mut state = ToastState::new();
        assert!(state.current().is_none());

        state.show("Hello");
        assert_eq!(state.current_message(), Some("Hello"));
    }

    #[test]
    fn test_toast_replacement() {
        let mut state = ToastState::new();
        state.show("First");
        state.show_warning("Second");

        assert_eq!(state.current_message(), Some("Second"));
        assert_eq!(state.current().unwrap().kind, ToastKind::Warning);
    }

    #[test]
    fn test_clear_if_expired() {
        let mut state = ToastState::new();
        state.show("Test");

        if let Some(ref mut toast) = state.current {
            toast.duration = Duration::from_millis(10);
        }

        assert!(!state.clear_if_expired());
        thread::sleep(Duration::from_millis(20));
        assert!(state.clear_if_expired());
        assert!(state.current().is_none());
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any sequence of toast messages, only the most recent
        /// toast should be visible.
        #[test]
        fn prop_toast_replacement(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,50}", 1..10)) {
            let mut state = ToastState::new();

            for msg in &messages {
                state.show(msg);
            }

            let last_message = messages.last().unwrap();
            prop_assert_eq!(state.current_message(), Some(last_message.as_str()));
        }
    }
}
