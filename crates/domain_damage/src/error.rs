//! Damage domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the damage domain
#[derive(Debug, Error)]
pub enum DamageError {
    #[error("Damage already fixed")]
    AlreadyFixed,

    #[error("Cannot update a fixed damage")]
    CannotUpdateFixedDamage,

    /// Storage detected a uniqueness violation; surfaced as-is
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Damage not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(PortError),
}

impl From<PortError> for DamageError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Conflict { message } => DamageError::Conflict(message),
            PortError::NotFound { id, .. } => DamageError::NotFound(id),
            other => DamageError::Storage(other),
        }
    }
}
