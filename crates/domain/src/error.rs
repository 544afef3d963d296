//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! The domain only knows about input validation; transport and server
//! rejections live in the application crate.

/// Input rejected before anything is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The host address is not a dotted-quad IPv4 address.
    #[error("Please enter a valid IPv4 address.")]
    InvalidIpv4 {
        /// The rejected input.
        input: String,
    },

    /// The add-host form was submitted without a management type.
    #[error("Please select a management type.")]
    MissingManagementType,

    /// A label has no code in the enum map it was looked up in.
    #[error("unknown {category} label: {label}")]
    UnknownLabel {
        /// Enum category slug, e.g. `power-actions`.
        category: &'static str,
        /// The label that was looked up.
        label: String,
    },
}
