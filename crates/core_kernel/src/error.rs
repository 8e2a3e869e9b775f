//! Core error types used across the system

use thiserror::Error;
use crate::temporal::TemporalError;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

/// A broken invariant that collaborators were responsible for enforcing
///
/// This is a programmer-error category, not a domain outcome: the data handed
/// to the core is already inconsistent and the core refuses to guess. Callers
/// should log it loudly and answer with an internal error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Precondition violated [{invariant}]: {detail}")]
pub struct PreconditionViolation {
    /// Short name of the broken invariant
    pub invariant: &'static str,
    /// Human-readable description of the observed state
    pub detail: String,
}

impl PreconditionViolation {
    pub fn new(invariant: &'static str, detail: impl Into<String>) -> Self {
        Self {
            invariant,
            detail: detail.into(),
        }
    }
}
