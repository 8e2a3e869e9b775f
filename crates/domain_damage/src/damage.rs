//! Damage aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{DamageId, LeaseId, RoomId};
use core_kernel::temporal::truncate_to_minute;
use crate::error::DamageError;
use crate::update::{OwnerDamageUpdate, TenantDamageUpdate};

/// Damage priority, as chosen by the tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamagePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl DamagePriority {
    /// Lowercase wire name, also used inside reminder texts
    pub fn as_str(&self) -> &'static str {
        match self {
            DamagePriority::Low => "low",
            DamagePriority::Medium => "medium",
            DamagePriority::High => "high",
            DamagePriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for DamagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which party confirms a fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixRole {
    Tenant,
    Owner,
}

/// Derived fix status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    /// Neither party confirmed the fix
    Open,
    /// Exactly one party confirmed the fix
    PartiallyFixed,
    /// Both parties confirmed; terminal
    Fixed,
}

/// A damage reported by a tenant against a room of a leased property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    /// Unique identifier
    pub id: DamageId,
    /// Lease under which the damage was reported
    pub lease_id: LeaseId,
    /// Room where the damage is located
    pub room_id: RoomId,
    /// Tenant description
    pub comment: String,
    /// Tenant-assigned priority
    pub priority: DamagePriority,
    /// Whether the owner has acknowledged the report
    pub read: bool,
    /// Tenant confirmed the fix
    pub fixed_by_tenant: bool,
    /// Owner confirmed the fix
    pub fixed_by_owner: bool,
    /// When the owner plans to fix it
    pub fix_planned_at: Option<DateTime<Utc>>,
    /// Set once, when both parties have confirmed
    pub fixed_at: Option<DateTime<Utc>>,
    /// Opaque picture references, in upload order
    pub pictures: Vec<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Damage {
    /// Creates a new open, unread damage report
    pub fn report(
        lease_id: LeaseId,
        room_id: RoomId,
        comment: impl Into<String>,
        priority: DamagePriority,
        pictures: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DamageId::new_v7(),
            lease_id,
            room_id,
            comment: comment.into(),
            priority,
            read: false,
            fixed_by_tenant: false,
            fixed_by_owner: false,
            fix_planned_at: None,
            fixed_at: None,
            pictures,
            created_at: now,
            updated_at: now,
        }
    }

    /// Derives the fix status from the confirmation flags
    pub fn status(&self) -> FixStatus {
        match (self.fixed_by_tenant, self.fixed_by_owner) {
            (true, true) => FixStatus::Fixed,
            (false, false) => FixStatus::Open,
            _ => FixStatus::PartiallyFixed,
        }
    }

    /// Returns true once both parties confirmed the fix
    pub fn is_fixed(&self) -> bool {
        self.status() == FixStatus::Fixed
    }

    /// Returns true when `fixed_at` agrees with the confirmation flags
    pub fn fix_invariant_holds(&self) -> bool {
        self.fixed_at.is_some() == (self.fixed_by_tenant && self.fixed_by_owner)
    }

    /// Records the fix confirmation for `role`
    ///
    /// Returns whether the damage changed. Confirming again for a role that
    /// already confirmed is a no-op; confirming a fully fixed damage fails.
    /// When the second confirmation lands, `fixed_at` is stamped with `now`
    /// truncated to the minute.
    pub fn mark_fixed(&mut self, role: FixRole, now: DateTime<Utc>) -> Result<bool, DamageError> {
        if self.is_fixed() {
            return Err(DamageError::AlreadyFixed);
        }

        let flag = match role {
            FixRole::Tenant => &mut self.fixed_by_tenant,
            FixRole::Owner => &mut self.fixed_by_owner,
        };
        if *flag {
            return Ok(false);
        }
        *flag = true;

        if self.fixed_by_tenant && self.fixed_by_owner {
            self.fixed_at = Some(truncate_to_minute(now));
        }
        self.updated_at = now;
        Ok(true)
    }

    /// Applies the owner's fields; absent fields are left unchanged
    ///
    /// Returns whether any field changed. `updated_at` only moves on a
    /// change. A fixed damage rejects every update, empty ones included.
    pub fn apply_owner_update(
        &mut self,
        update: &OwnerDamageUpdate,
        now: DateTime<Utc>,
    ) -> Result<bool, DamageError> {
        self.ensure_mutable()?;

        let mut changed = false;
        if let Some(read) = update.read.filter(|read| *read != self.read) {
            self.read = read;
            changed = true;
        }
        if let Some(planned) = update.fix_planned_at.filter(|p| Some(*p) != self.fix_planned_at) {
            self.fix_planned_at = Some(planned);
            changed = true;
        }
        if changed {
            self.updated_at = now;
        }
        Ok(changed)
    }

    /// Applies the tenant's fields; pictures are appended, never replaced
    ///
    /// Returns whether any field changed, like [`Damage::apply_owner_update`].
    pub fn apply_tenant_update(
        &mut self,
        update: TenantDamageUpdate,
        now: DateTime<Utc>,
    ) -> Result<bool, DamageError> {
        self.ensure_mutable()?;
        if update.is_empty() {
            return Ok(false);
        }

        let mut changed = !update.add_pictures.is_empty();
        if let Some(comment) = update.comment.filter(|c| *c != self.comment) {
            self.comment = comment;
            changed = true;
        }
        if let Some(priority) = update.priority.filter(|p| *p != self.priority) {
            self.priority = priority;
            changed = true;
        }
        self.pictures.extend(update.add_pictures);
        if changed {
            self.updated_at = now;
        }
        Ok(changed)
    }

    fn ensure_mutable(&self) -> Result<(), DamageError> {
        if self.is_fixed() {
            return Err(DamageError::CannotUpdateFixedDamage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 9, 41, 37).unwrap()
    }

    fn open_damage() -> Damage {
        Damage::report(
            LeaseId::new_v7(),
            RoomId::new_v7(),
            "Leaking tap",
            DamagePriority::Medium,
            vec![],
            now() - Duration::days(2),
        )
    }

    #[test]
    fn test_report_starts_open_and_unread() {
        let damage = open_damage();

        assert_eq!(damage.status(), FixStatus::Open);
        assert!(!damage.read);
        assert!(damage.fixed_at.is_none());
        assert_eq!(damage.created_at, damage.updated_at);
    }

    #[test]
    fn test_second_confirmation_stamps_fixed_at_to_minute() {
        let mut damage = open_damage();
        damage.mark_fixed(FixRole::Tenant, now()).unwrap();
        damage.mark_fixed(FixRole::Owner, now()).unwrap();

        let fixed_at = damage.fixed_at.unwrap();
        assert_eq!(fixed_at.second(), 0);
        assert_eq!(fixed_at.minute(), 41);
        assert_eq!(damage.updated_at, now());
    }

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(DamagePriority::Urgent.to_string(), "urgent");
        assert_eq!(serde_json::to_string(&DamagePriority::High).unwrap(), "\"high\"");
    }
}
