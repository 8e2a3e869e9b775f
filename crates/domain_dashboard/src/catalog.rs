//! The reminder catalog
//!
//! Two ordered tables of rules: property-scoped rules run once per property,
//! damage-scoped rules once per damage the owner has not confirmed as fixed.
//! Each rule is a predicate plus a formatter producing the placeholder
//! values. The engine folds over both tables without short-circuiting, so
//! the order here is the encounter order within a priority level.
//!
//! The all-good entry is not a rule: the engine emits it when nothing fired.

use chrono::{DateTime, Utc};

use core_kernel::temporal::{
    days_until, is_older_than_days, is_within_next_days, whole_days_between,
};
use domain_damage::{Damage, DamagePriority};
use domain_property::{Lease, Property, Room};

use crate::reminder::{Occurrence, ReminderKind, ReminderPriority, TemplateValues};

/// Look-ahead window for lease ends
pub const LEASE_ENDING_WINDOW_DAYS: i64 = 30;
/// Look-ahead window for planned fixes
pub const FIX_PLANNED_WINDOW_DAYS: i64 = 7;
/// Age after which an invite or an unplanned damage is stale
pub const STALE_AFTER_DAYS: i64 = 7;

/// Inputs of a property-scoped rule
#[derive(Debug, Clone, Copy)]
pub struct PropertyContext<'a> {
    pub property: &'a Property,
    pub active_lease: Option<&'a Lease>,
    pub now: DateTime<Utc>,
}

/// Inputs of a damage-scoped rule
#[derive(Debug, Clone, Copy)]
pub struct DamageContext<'a> {
    pub property: &'a Property,
    pub lease: &'a Lease,
    pub damage: &'a Damage,
    pub room: Option<&'a Room>,
    pub now: DateTime<Utc>,
}

impl DamageContext<'_> {
    /// Room name; `None` when the room is not in the graph
    pub fn room_name(&self) -> Option<&str> {
        self.room.map(|r| r.name.as_str())
    }

    /// Without a known room the `room` value is left out and the translator
    /// supplies its localized fallback
    fn values(&self) -> TemplateValues {
        let values = TemplateValues::new()
            .property(&self.property.name, self.property.id)
            .damage(self.damage.id, self.damage.priority);
        match self.room_name() {
            Some(name) => values.room(name),
            None => values,
        }
    }
}

/// A property-scoped catalog entry
pub struct PropertyRule {
    pub kind: ReminderKind,
    pub priority: ReminderPriority,
    pub applies: fn(&PropertyContext<'_>) -> bool,
    pub values: fn(&PropertyContext<'_>) -> TemplateValues,
}

/// A damage-scoped catalog entry
pub struct DamageRule {
    pub kind: ReminderKind,
    pub priority: ReminderPriority,
    pub applies: fn(&DamageContext<'_>) -> bool,
    pub values: fn(&DamageContext<'_>) -> TemplateValues,
}

impl PropertyRule {
    pub fn evaluate(&self, ctx: &PropertyContext<'_>) -> Option<Occurrence> {
        (self.applies)(ctx).then(|| Occurrence {
            kind: self.kind,
            priority: self.priority,
            values: (self.values)(ctx),
        })
    }
}

impl DamageRule {
    pub fn evaluate(&self, ctx: &DamageContext<'_>) -> Option<Occurrence> {
        (self.applies)(ctx).then(|| Occurrence {
            kind: self.kind,
            priority: self.priority,
            values: (self.values)(ctx),
        })
    }
}

fn property_values(ctx: &PropertyContext<'_>) -> TemplateValues {
    TemplateValues::new().property(&ctx.property.name, ctx.property.id)
}

fn lease_end(ctx: &PropertyContext<'_>) -> Option<DateTime<Utc>> {
    ctx.active_lease.and_then(|l| l.end_date)
}

pub static PROPERTY_RULES: [PropertyRule; 6] = [
    PropertyRule {
        kind: ReminderKind::LeaseEndingSoon,
        priority: ReminderPriority::High,
        applies: |ctx| {
            lease_end(ctx)
                .map(|end| is_within_next_days(end, ctx.now, LEASE_ENDING_WINDOW_DAYS))
                .unwrap_or(false)
        },
        values: |ctx| {
            let days = lease_end(ctx)
                .map(|end| days_until(ctx.now, end))
                .unwrap_or_default();
            property_values(ctx).days(days)
        },
    },
    PropertyRule {
        kind: ReminderKind::LeasePastEndDate,
        priority: ReminderPriority::High,
        applies: |ctx| lease_end(ctx).map(|end| end < ctx.now).unwrap_or(false),
        values: |ctx| {
            let days = lease_end(ctx)
                .map(|end| whole_days_between(end, ctx.now))
                .unwrap_or_default();
            property_values(ctx).days(days)
        },
    },
    PropertyRule {
        kind: ReminderKind::NoInventoryReport,
        priority: ReminderPriority::High,
        applies: |ctx| {
            ctx.active_lease
                .map(|l| !l.has_inventory_report())
                .unwrap_or(false)
        },
        values: property_values,
    },
    PropertyRule {
        kind: ReminderKind::PropertyAvailable,
        priority: ReminderPriority::Low,
        applies: |ctx| ctx.active_lease.is_none() && ctx.property.pending_invite.is_none(),
        values: property_values,
    },
    PropertyRule {
        kind: ReminderKind::EmptyInventory,
        priority: ReminderPriority::Medium,
        applies: |ctx| ctx.property.rooms.is_empty(),
        values: property_values,
    },
    PropertyRule {
        kind: ReminderKind::PendingInviteStale,
        priority: ReminderPriority::Medium,
        applies: |ctx| {
            ctx.active_lease.is_none()
                && ctx
                    .property
                    .pending_invite
                    .as_ref()
                    .map(|invite| invite.is_older_than(STALE_AFTER_DAYS, ctx.now))
                    .unwrap_or(false)
        },
        values: |ctx| {
            let days = ctx
                .property
                .pending_invite
                .as_ref()
                .map(|invite| invite.age_days(ctx.now))
                .unwrap_or_default();
            property_values(ctx).days(days)
        },
    },
];

fn planned_in_past(ctx: &DamageContext<'_>) -> bool {
    ctx.damage
        .fix_planned_at
        .map(|planned| planned < ctx.now)
        .unwrap_or(false)
}

pub static DAMAGE_RULES: [DamageRule; 6] = [
    DamageRule {
        kind: ReminderKind::NewDamage,
        priority: ReminderPriority::High,
        applies: |ctx| !ctx.damage.read,
        values: |ctx| ctx.values(),
    },
    DamageRule {
        kind: ReminderKind::FixPlannedSoon,
        priority: ReminderPriority::High,
        applies: |ctx| {
            !planned_in_past(ctx)
                && ctx
                    .damage
                    .fix_planned_at
                    .map(|planned| is_within_next_days(planned, ctx.now, FIX_PLANNED_WINDOW_DAYS))
                    .unwrap_or(false)
        },
        values: |ctx| {
            let days = ctx
                .damage
                .fix_planned_at
                .map(|planned| days_until(ctx.now, planned))
                .unwrap_or_default();
            ctx.values().days(days)
        },
    },
    DamageRule {
        kind: ReminderKind::UrgentDamageUnplanned,
        priority: ReminderPriority::Urgent,
        applies: |ctx| {
            ctx.damage.fix_planned_at.is_none() && ctx.damage.priority == DamagePriority::Urgent
        },
        values: |ctx| ctx.values(),
    },
    DamageRule {
        kind: ReminderKind::DamageStale,
        priority: ReminderPriority::Urgent,
        applies: |ctx| {
            ctx.damage.read
                && ctx.damage.fix_planned_at.is_none()
                && is_older_than_days(ctx.damage.created_at, ctx.now, STALE_AFTER_DAYS)
        },
        values: |ctx| ctx.values(),
    },
    DamageRule {
        kind: ReminderKind::FixedByTenant,
        priority: ReminderPriority::Medium,
        applies: |ctx| ctx.damage.fixed_by_tenant,
        values: |ctx| ctx.values(),
    },
    DamageRule {
        kind: ReminderKind::FixOverdue,
        priority: ReminderPriority::High,
        applies: planned_in_past,
        values: |ctx| {
            let days = ctx
                .damage
                .fix_planned_at
                .map(|planned| whole_days_between(planned, ctx.now))
                .unwrap_or_default();
            ctx.values().days(days)
        },
    },
];
