//! Port plumbing shared by the domain crates
//!
//! Each domain declares its own port traits (`PropertyPort`, `DamagePort`)
//! on top of [`DomainPort`] and reports failures as [`PortError`]. Adapters,
//! whether a storage layer or the in-memory store, only have to map their
//! failures onto these categories. `Conflict` is what storage raises on a
//! uniqueness violation; the core surfaces it without retrying.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a port adapter
#[derive(Debug, Error)]
pub enum PortError {
    #[error("{entity_type} {id} not found")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The adapter rejected the input
    #[error("Invalid {field}: {message}")]
    Validation {
        field: String,
        message: String,
    },

    /// A uniqueness or consistency rule of the store was violated
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// The backing store could not be reached
    #[error("Store unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PortError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        PortError::Unavailable {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker for port traits; ports are shared across async tasks
pub trait DomainPort: Send + Sync + 'static {}

/// Adapter health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

/// Outcome of one adapter health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    pub latency_ms: u64,
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

/// Adapters checked by the readiness endpoint
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

/// Request context passed down to adapters for logging
#[derive(Debug, Clone, Default)]
pub struct OperationMetadata {
    /// Request id propagated from the HTTP layer
    pub correlation_id: Option<String>,
    /// User id of the caller
    pub initiated_by: Option<String>,
    pub context: HashMap<String, String>,
}

impl OperationMetadata {
    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: Some(correlation_id.into()),
            ..Default::default()
        }
    }

    pub fn initiated_by(mut self, user: impl Into<String>) -> Self {
        self.initiated_by = Some(user.into());
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
