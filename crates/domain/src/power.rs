//! Power state presentation.

use serde::{Deserialize, Serialize};

/// Visual classification of a host's power label.
///
/// Derived from the resolved label text, not the code: a label containing
/// `on` (any case) is [`On`](Self::On), else one containing `off` is
/// [`Off`](Self::Off), anything else is [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerBadge {
    On,
    Off,
    #[default]
    Unknown,
}

impl PowerBadge {
    /// Classify a resolved power-state label.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let normalized = label.to_lowercase();
        if normalized.contains("on") {
            Self::On
        } else if normalized.contains("off") {
            Self::Off
        } else {
            Self::Unknown
        }
    }

    /// CSS class applied to the badge element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::On => "power-on",
            Self::Off => "power-off",
            Self::Unknown => "power-unknown",
        }
    }
}

/// What a host card shows about power: label, badge and "as of" caption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PowerStatus {
    pub label: String,
    pub badge: PowerBadge,
    /// `"As of MM/DD/YYYY HH:MM"`, absent when the backend sent no time.
    pub as_of: Option<String>,
}

impl PowerStatus {
    /// Build a status from a resolved label, classifying the badge.
    #[must_use]
    pub fn new(label: impl Into<String>, as_of: Option<String>) -> Self {
        let label = label.into();
        Self {
            badge: PowerBadge::classify(&label),
            label,
            as_of,
        }
    }
}
