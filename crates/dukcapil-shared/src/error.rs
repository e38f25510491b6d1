//! Error types for the service-desk core.

use thiserror::Error;

/// Generic apology shown when an event could not be answered.
pub const APOLOGY_TEXT: &str = "⚠️ Maaf, sedang ada gangguan. Coba lagi sebentar ya.";

/// Apology for free-text messages that failed mid-way.
pub const MESSAGE_FAILURE_TEXT: &str = "⚠️ Terjadi gangguan. Silakan coba lagi.";

/// Short notice for buttons that no longer map to a menu.
pub const UNKNOWN_BUTTON_TEXT: &str = "Menu tidak dikenali.";

/// Alert shown on a button press that failed.
pub const BUTTON_FAILURE_TEXT: &str = "Terjadi gangguan. Coba lagi ya.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Unknown button: {0}")]
    UnknownButton(String),

    #[error("Invalid chunk limit: {0} (must be at least 1)")]
    InvalidLimit(usize),
}

impl CoreError {
    /// Internal-invariant violations, as opposed to stale client input.
    pub fn is_defect(&self) -> bool {
        !matches!(self, CoreError::UnknownButton(_))
    }

    /// Text shown to the user when this error ends an event.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoreError::UnknownButton(_) => UNKNOWN_BUTTON_TEXT,
            CoreError::UnknownTopic(_) | CoreError::InvalidLimit(_) => APOLOGY_TEXT,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
