//! State machines behind the dashboard's interactive controls.
//!
//! These hold no DOM references; components keep one value of each in a
//! reactive signal and render from it.

/// Label shown on a button while its request is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";
/// Label of the unenroll button while the delete is in flight.
pub const REMOVING_LABEL: &str = "Removing...";
/// Label of the logout button after it was clicked.
pub const LOGGING_OUT_LABEL: &str = "Logging out...";
/// Placeholder of the management-type dropdown.
pub const SELECT_MANAGEMENT_TYPE: &str = "Select Management Type";

/// The two admin forms of the dashboard toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminForm {
    AddHost,
    UploadIso,
}

impl AdminForm {
    const ALL: [Self; 2] = [Self::AddHost, Self::UploadIso];
}

/// Lifecycle of one admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// Fields of the add-host form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostDraft {
    pub address: String,
    /// Selected management-type label.
    pub management_type: Option<String>,
}

impl HostDraft {
    /// Text of the management-type dropdown button.
    #[must_use]
    pub fn management_type_label(&self) -> &str {
        self.management_type
            .as_deref()
            .unwrap_or(SELECT_MANAGEMENT_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FormSlot {
    phase: FormPhase,
    error: Option<String>,
}

/// The admin forms, at most one of which is open.
///
/// `closed → open → submitting → closed`; a rejected submission goes back to
/// `open` with an error message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminPanel {
    add_host: FormSlot,
    upload_iso: FormSlot,
    /// Add-host fields, reset whenever that form closes.
    pub draft: HostDraft,
}

impl AdminPanel {
    #[must_use]
    pub fn phase(&self, form: AdminForm) -> FormPhase {
        self.slot(form).phase
    }

    /// Whether the form is visible (open or submitting).
    #[must_use]
    pub fn is_open(&self, form: AdminForm) -> bool {
        self.phase(form) != FormPhase::Closed
    }

    #[must_use]
    pub fn is_submitting(&self, form: AdminForm) -> bool {
        self.phase(form) == FormPhase::Submitting
    }

    #[must_use]
    pub fn error(&self, form: AdminForm) -> Option<&str> {
        self.slot(form).error.as_deref()
    }

    /// Toolbar button: open `form` if closed (closing and resetting every
    /// other form), close it if open.
    pub fn toggle(&mut self, form: AdminForm) {
        let opening = !self.is_open(form);
        for other in AdminForm::ALL {
            self.close(other);
        }
        if opening {
            self.slot_mut(form).phase = FormPhase::Open;
        }
    }

    /// Cancel button or successful submission: hide and reset the form.
    pub fn close(&mut self, form: AdminForm) {
        *self.slot_mut(form) = FormSlot::default();
        if form == AdminForm::AddHost {
            self.draft = HostDraft::default();
        }
    }

    /// Move an open form into `submitting`, clearing any previous error.
    /// Returns `false` (and changes nothing) if the form was not open.
    pub fn begin_submit(&mut self, form: AdminForm) -> bool {
        let slot = self.slot_mut(form);
        if slot.phase != FormPhase::Open {
            return false;
        }
        slot.phase = FormPhase::Submitting;
        slot.error = None;
        true
    }

    /// Show an error on an open form. A submitting form goes back to `open`.
    pub fn fail(&mut self, form: AdminForm, message: impl Into<String>) {
        let slot = self.slot_mut(form);
        if slot.phase == FormPhase::Closed {
            return;
        }
        slot.phase = FormPhase::Open;
        slot.error = Some(message.into());
    }

    fn slot(&self, form: AdminForm) -> &FormSlot {
        match form {
            AdminForm::AddHost => &self.add_host,
            AdminForm::UploadIso => &self.upload_iso,
        }
    }

    fn slot_mut(&mut self, form: AdminForm) -> &mut FormSlot {
        match form {
            AdminForm::AddHost => &mut self.add_host,
            AdminForm::UploadIso => &mut self.upload_iso,
        }
    }
}

/// Open/closed state of every dropdown menu on the page.
///
/// Power menus (one per host, keyed by management IP), the
/// management-type menu of the add-host form and the user menu of the nav
/// bar are mutually exclusive: opening any of them closes the rest, and
/// [`close_all`](Self::close_all) closes every kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuState {
    power: Option<String>,
    management_type: bool,
    user: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_power_open(&self, management_ip: &str) -> bool {
        self.power.as_deref() == Some(management_ip)
    }

    #[must_use]
    pub fn is_management_type_open(&self) -> bool {
        self.management_type
    }

    /// Toggle the power menu of one host.
    pub fn toggle_power(&mut self, management_ip: &str) {
        let opening = !self.is_power_open(management_ip);
        self.close_all();
        if opening {
            self.power = Some(management_ip.to_string());
        }
    }

    /// Toggle the management-type menu.
    pub fn toggle_management_type(&mut self) {
        let opening = !self.management_type;
        self.close_all();
        self.management_type = opening;
    }

    pub fn close_management_type(&mut self) {
        self.management_type = false;
    }

    #[must_use]
    pub fn is_user_open(&self) -> bool {
        self.user
    }

    /// Toggle the user menu of the nav bar.
    pub fn toggle_user(&mut self) {
        let opening = !self.user;
        self.close_all();
        self.user = opening;
    }

    pub fn close_all(&mut self) {
        self.power = None;
        self.management_type = false;
        self.user = false;
    }

    /// A click anywhere on the document. Clicks outside every menu and menu
    /// button close all menus.
    pub fn on_document_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.close_all();
        }
    }
}

/// Per-host power menu: which action is in flight and the inline error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PowerMenuState {
    pending: Option<String>,
    error: Option<String>,
}

impl PowerMenuState {
    /// Start an action: every button disables, the clicked one shows
    /// [`PROCESSING_LABEL`], and the previous error clears.
    pub fn begin(&mut self, action: impl Into<String>) {
        self.pending = Some(action.into());
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Final step of every action, success or not: re-enable the buttons.
    pub fn finish(&mut self) {
        self.pending = None;
    }

    /// Clear error and pending state, as when the menu opens or closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the menu's buttons are disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Text of the button for `action`.
    #[must_use]
    pub fn button_label<'a>(&self, action: &'a str) -> &'a str {
        if self.pending.as_deref() == Some(action) {
            PROCESSING_LABEL
        } else {
            action
        }
    }
}

/// State of a button that runs one request then either disappears or
/// restores itself (unenroll, logout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Busy,
}

impl ButtonPhase {
    /// The label to show: `busy_label` while busy, `idle_label` otherwise.
    #[must_use]
    pub fn label<'a>(self, idle_label: &'a str, busy_label: &'a str) -> &'a str {
        match self {
            Self::Idle => idle_label,
            Self::Busy => busy_label,
        }
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        self == Self::Busy
    }
}
