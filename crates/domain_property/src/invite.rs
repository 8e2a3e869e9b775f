//! Pending tenant invites

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{is_older_than_days, whole_days_between};
use core_kernel::PropertyId;

/// An invitation not yet accepted by the tenant
///
/// Exists only while the property has no active lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingInvite {
    pub tenant_email: String,
    pub property_id: PropertyId,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PendingInvite {
    /// Whole days since the invite was sent
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        whole_days_between(self.created_at, now)
    }

    /// True once the invite has waited more than `days` days
    pub fn is_older_than(&self, days: i64, now: DateTime<Utc>) -> bool {
        is_older_than_days(self.created_at, now, days)
    }
}
