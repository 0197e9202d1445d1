//! Slack integration setup wizard
//!
//! A four-step modal dialog: welcome, app-creation instructions (manifest
//! download / URL copy), credential entry, completion. Steps only move
//! forward on explicit user action, except that a successful credential
//! submission advances to the final step on its own.

mod wizard_events;
mod wizard_render;
mod wizard_state;

pub use wizard_events::{
    CREDENTIALS_FALLBACK_ERROR, TEST_FALLBACK_ERROR, handle_wizard_key, handle_wizard_paste,
};
pub use wizard_render::render_wizard;
pub use wizard_state::{CredentialField, SECRET_MASK, WizardState, WizardStep};
