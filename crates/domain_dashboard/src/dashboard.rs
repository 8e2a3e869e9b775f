//! Dashboard aggregates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{is_within_next_days, is_within_past_days};
use core_kernel::{DamageId, LeaseId, PropertyId, RoomId};
use domain_damage::{Damage, DamagePriority};
use domain_property::{Lease, Property};

use crate::reminder::Reminder;

/// Window for "recently added" properties
pub const RECENTLY_ADDED_DAYS: i64 = 7;
/// Window for "planned this week" damages
pub const PLANNED_THIS_WEEK_DAYS: i64 = 7;

/// The owner dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub reminders: Vec<Reminder>,
    pub properties: DashboardProperties,
    pub open_damages: DashboardOpenDamages,
}

/// Property counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardProperties {
    pub total: u32,
    pub archived: u32,
    /// With an active lease
    pub occupied: u32,
    /// Neither an active lease nor a pending invite
    pub available: u32,
    pub pending_invites: u32,
    pub recently_added: u32,
}

impl DashboardProperties {
    pub(crate) fn record(
        &mut self,
        property: &Property,
        active_lease: Option<&Lease>,
        now: DateTime<Utc>,
    ) {
        self.total += 1;
        if property.archived {
            self.archived += 1;
        }
        match (active_lease, &property.pending_invite) {
            (Some(_), _) => self.occupied += 1,
            (None, Some(_)) => self.pending_invites += 1,
            (None, None) => self.available += 1,
        }
        if is_within_past_days(property.created_at, now, RECENTLY_ADDED_DAYS) {
            self.recently_added += 1;
        }
    }
}

/// A damage awaiting the owner, annotated for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDamageEntry {
    pub id: DamageId,
    pub lease_id: LeaseId,
    pub property_id: PropertyId,
    pub property_name: String,
    pub room_id: RoomId,
    pub room_name: Option<String>,
    pub tenant_name: String,
    pub comment: String,
    pub priority: DamagePriority,
    pub read: bool,
    pub fixed_by_tenant: bool,
    pub fix_planned_at: Option<DateTime<Utc>>,
    pub pictures: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Damages not yet confirmed fixed by the owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOpenDamages {
    pub total: u32,
    pub urgent: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub planned_this_week: u32,
    pub damages: Vec<OpenDamageEntry>,
}

impl DashboardOpenDamages {
    pub(crate) fn record(
        &mut self,
        property: &Property,
        lease: &Lease,
        damage: &Damage,
        now: DateTime<Utc>,
    ) {
        self.total += 1;
        match damage.priority {
            DamagePriority::Urgent => self.urgent += 1,
            DamagePriority::High => self.high += 1,
            DamagePriority::Medium => self.medium += 1,
            DamagePriority::Low => self.low += 1,
        }
        let planned_soon = damage
            .fix_planned_at
            .map(|planned| is_within_next_days(planned, now, PLANNED_THIS_WEEK_DAYS))
            .unwrap_or(false);
        if planned_soon {
            self.planned_this_week += 1;
        }

        self.damages.push(OpenDamageEntry {
            id: damage.id,
            lease_id: lease.id,
            property_id: property.id,
            property_name: property.name.clone(),
            room_id: damage.room_id,
            room_name: property.room(damage.room_id).map(|r| r.name.clone()),
            tenant_name: lease.tenant.name.clone(),
            comment: damage.comment.clone(),
            priority: damage.priority,
            read: damage.read,
            fixed_by_tenant: damage.fixed_by_tenant,
            fix_planned_at: damage.fix_planned_at,
            pictures: damage.pictures.clone(),
            created_at: damage.created_at,
        });
    }
}
