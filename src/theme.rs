//! Color constants for the taskdeck UI
//!
//! Grouped by surface so render code reads as `theme::banner::ACCENT_URGENT`.

use ratatui::style::Color;

pub mod chrome {
    use super::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const TITLE: Color = Color::Cyan;
    pub const HINT: Color = Color::DarkGray;
    pub const STATUS_OK: Color = Color::Green;
    pub const STATUS_PENDING: Color = Color::Yellow;
}

pub mod banner {
    use super::Color;

    pub const ACCENT_INFO: Color = Color::Blue;
    pub const ACCENT_SUCCESS: Color = Color::Green;
    pub const ACCENT_WARNING: Color = Color::Yellow;
    pub const ACCENT_URGENT: Color = Color::Red;
    pub const ACCENT_FEATURE: Color = Color::Magenta;

    pub const TITLE: Color = Color::White;
    pub const MESSAGE: Color = Color::Gray;
    pub const SELECTED_BORDER: Color = Color::Cyan;
}

pub mod dialog {
    use super::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const STEP_LABEL: Color = Color::DarkGray;
    pub const HEADING: Color = Color::White;
    pub const BODY: Color = Color::Gray;
    pub const URL: Color = Color::Cyan;
    pub const FIELD_FOCUSED: Color = Color::Cyan;
    pub const FIELD_UNFOCUSED: Color = Color::DarkGray;
    pub const SUBMIT_READY: Color = Color::Green;
    pub const SUBMIT_DISABLED: Color = Color::DarkGray;
    pub const DONE_MARK: Color = Color::Green;
}
