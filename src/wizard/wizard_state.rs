//! Wizard step machine and credential fields

use ratatui::style::Style;
use tui_textarea::TextArea;

/// Mask character for the client secret field
pub const SECRET_MASK: char = '•';

/// The four wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Welcome,
    CreateApp,
    Credentials,
    Done,
}

impl WizardStep {
    /// 1-based position for the step indicator
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Welcome => 1,
            WizardStep::CreateApp => 2,
            WizardStep::Credentials => 3,
            WizardStep::Done => 4,
        }
    }

    /// The step reached by an explicit "continue". Credential entry has no
    /// explicit forward transition - only a successful submission leaves
    /// it - and the final step is terminal.
    pub fn forward(self) -> Option<WizardStep> {
        match self {
            WizardStep::Welcome => Some(WizardStep::CreateApp),
            WizardStep::CreateApp => Some(WizardStep::Credentials),
            WizardStep::Credentials | WizardStep::Done => None,
        }
    }

    /// The step reached by "back". Welcome has nowhere to go and the final
    /// step only closes.
    pub fn backward(self) -> Option<WizardStep> {
        match self {
            WizardStep::CreateApp => Some(WizardStep::Welcome),
            WizardStep::Credentials => Some(WizardStep::CreateApp),
            WizardStep::Welcome | WizardStep::Done => None,
        }
    }
}

/// Which credential field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialField {
    #[default]
    ClientId,
    ClientSecret,
}

impl CredentialField {
    pub fn toggle(self) -> Self {
        match self {
            CredentialField::ClientId => CredentialField::ClientSecret,
            CredentialField::ClientSecret => CredentialField::ClientId,
        }
    }
}

/// All wizard state. Ephemeral: opening the wizard rebuilds this from
/// scratch, so a previous partial run never leaks into a new one.
pub struct WizardState {
    pub visible: bool,
    pub step: WizardStep,
    pub client_id: TextArea<'static>,
    pub client_secret: TextArea<'static>,
    pub field_focus: CredentialField,
    /// Credential submission in flight
    pub submitting: bool,
    /// Connection test in flight
    pub testing: bool,
    /// Manifest fetch in flight
    pub manifest_fetching: bool,
    /// Cosmetic: the download button confirms instead of re-prompting.
    /// Never gates progression.
    pub manifest_downloaded: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            visible: false,
            step: WizardStep::Welcome,
            client_id: credential_field("1234567890.123456789012", None),
            client_secret: credential_field("paste your client secret", Some(SECRET_MASK)),
            field_focus: CredentialField::ClientId,
            submitting: false,
            testing: false,
            manifest_fetching: false,
            manifest_downloaded: false,
        }
    }

    /// Open fresh: step 1, empty fields, no pending flags.
    pub fn open(&mut self) {
        *self = Self::new();
        self.visible = true;
    }

    /// Close and drop everything, credentials included.
    pub fn close(&mut self) {
        *self = Self::new();
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.step.forward() {
            self.step = next;
        }
    }

    pub fn retreat(&mut self) {
        if let Some(previous) = self.step.backward() {
            self.step = previous;
        }
    }

    pub fn client_id_value(&self) -> &str {
        self.client_id.lines()[0].as_ref()
    }

    pub fn client_secret_value(&self) -> &str {
        self.client_secret.lines()[0].as_ref()
    }

    /// Submission is possible once both fields have non-whitespace content
    /// and nothing is already in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting
            && !self.client_id_value().trim().is_empty()
            && !self.client_secret_value().trim().is_empty()
    }

    pub fn focused_field_mut(&mut self) -> &mut TextArea<'static> {
        match self.field_focus {
            CredentialField::ClientId => &mut self.client_id,
            CredentialField::ClientSecret => &mut self.client_secret,
        }
    }
}

fn credential_field(placeholder: &str, mask: Option<char>) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    if let Some(mask) = mask {
        textarea.set_mask_char(mask);
    }
    textarea
}

#[cfg(test)]
#[path = "wizard_state_tests.rs"]
mod wizard_state_tests;
