//! Dashboard errors

use thiserror::Error;

use core_kernel::PreconditionViolation;

/// Errors that can occur while building a dashboard
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The graph breaks an invariant collaborators must uphold; fatal
    #[error(transparent)]
    PreconditionViolation(#[from] PreconditionViolation),

    /// A reminder template is missing or failed to resolve
    #[error("Localization error for {key}: {message}")]
    Localization { key: String, message: String },
}

impl DashboardError {
    pub fn localization(key: impl Into<String>, message: impl Into<String>) -> Self {
        DashboardError::Localization {
            key: key.into(),
            message: message.into(),
        }
    }

    /// True for the programmer-error category
    pub fn is_fatal(&self) -> bool {
        matches!(self, DashboardError::PreconditionViolation(_))
    }
}
