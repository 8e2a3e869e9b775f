//! Role-scoped damage update commands
//!
//! The owner and the tenant each get a command type listing exactly the
//! fields they may change. Every field is optional: absent means unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::damage::DamagePriority;

/// Fields the property owner may change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDamageUpdate {
    /// Acknowledge (or un-acknowledge) the report
    pub read: Option<bool>,
    /// Schedule the fix
    pub fix_planned_at: Option<DateTime<Utc>>,
}

impl OwnerDamageUpdate {
    /// Marks the damage as read
    pub fn mark_read() -> Self {
        Self {
            read: Some(true),
            ..Default::default()
        }
    }

    /// Plans the fix at the given instant
    pub fn plan_fix(at: DateTime<Utc>) -> Self {
        Self {
            fix_planned_at: Some(at),
            ..Default::default()
        }
    }
}

/// Fields the tenant may change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDamageUpdate {
    pub comment: Option<String>,
    pub priority: Option<DamagePriority>,
    /// Picture references to append
    #[serde(default)]
    pub add_pictures: Vec<String>,
}

impl TenantDamageUpdate {
    /// Returns true when the command carries no change at all
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.priority.is_none() && self.add_pictures.is_empty()
    }
}
