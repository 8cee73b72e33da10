//! Errors returned by [`ShortcutStore`](super::ShortcutStore) operations.

use thiserror::Error;

/// Rejected store operation. State is never modified when one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Draft or input failed validation (blank name, missing keys, bad extra data).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An application with this process name already exists.
    #[error("application '{0}' already exists")]
    DuplicateApplication(String),

    /// No application with this process name.
    #[error("application '{0}' not found")]
    ApplicationNotFound(String),

    /// The application exists but has no mapping with this id.
    #[error("shortcut '{shortcut_id}' not found in application '{process_name}'")]
    ShortcutNotFound {
        /// Application the lookup ran against
        process_name: String,
        /// Missing mapping id
        shortcut_id: String,
    },

    /// Save was requested without an open editing session.
    #[error("no shortcut is being edited")]
    NoActiveSession,
}

impl StoreError {
    /// True for the not-found family of errors.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ApplicationNotFound(_) | Self::ShortcutNotFound { .. }
        )
    }
}
