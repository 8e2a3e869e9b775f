//! Reminder types
//!
//! A rule that fires yields an [`Occurrence`]: which catalog entry, at which
//! priority, with which placeholder values. Localizing an occurrence turns it
//! into the [`Reminder`] shown on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{DamageId, PropertyId};
use domain_damage::DamagePriority;

/// Reminder priority, most pressing first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl ReminderPriority {
    /// Sort rank: urgent first, low last
    pub fn rank(&self) -> u8 {
        match self {
            ReminderPriority::Urgent => 0,
            ReminderPriority::High => 1,
            ReminderPriority::Medium => 2,
            ReminderPriority::Low => 3,
        }
    }
}

impl fmt::Display for ReminderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReminderPriority::Urgent => "urgent",
            ReminderPriority::High => "high",
            ReminderPriority::Medium => "medium",
            ReminderPriority::Low => "low",
        };
        f.write_str(name)
    }
}

/// Entries of the reminder catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    LeaseEndingSoon,
    NoInventoryReport,
    PropertyAvailable,
    EmptyInventory,
    PendingInviteStale,
    NewDamage,
    FixPlannedSoon,
    UrgentDamageUnplanned,
    DamageStale,
    FixedByTenant,
    FixOverdue,
    AllGood,
    LeasePastEndDate,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 13] = [
        ReminderKind::LeaseEndingSoon,
        ReminderKind::NoInventoryReport,
        ReminderKind::PropertyAvailable,
        ReminderKind::EmptyInventory,
        ReminderKind::PendingInviteStale,
        ReminderKind::NewDamage,
        ReminderKind::FixPlannedSoon,
        ReminderKind::UrgentDamageUnplanned,
        ReminderKind::DamageStale,
        ReminderKind::FixedByTenant,
        ReminderKind::FixOverdue,
        ReminderKind::AllGood,
        ReminderKind::LeasePastEndDate,
    ];

    /// Stable catalog key exposed to clients
    pub fn id(&self) -> &'static str {
        match self {
            ReminderKind::LeaseEndingSoon => "1",
            ReminderKind::NoInventoryReport => "2",
            ReminderKind::PropertyAvailable => "3",
            ReminderKind::EmptyInventory => "4",
            ReminderKind::PendingInviteStale => "5",
            ReminderKind::NewDamage => "6",
            ReminderKind::FixPlannedSoon => "7",
            ReminderKind::UrgentDamageUnplanned => "8",
            ReminderKind::DamageStale => "9",
            ReminderKind::FixedByTenant => "10",
            ReminderKind::FixOverdue => "11",
            ReminderKind::AllGood => "12",
            ReminderKind::LeasePastEndDate => "13",
        }
    }

    /// Message id in the `.ftl` resources
    pub fn message_id(&self) -> &'static str {
        match self {
            ReminderKind::LeaseEndingSoon => "reminder-lease-ending",
            ReminderKind::NoInventoryReport => "reminder-no-inventory",
            ReminderKind::PropertyAvailable => "reminder-property-available",
            ReminderKind::EmptyInventory => "reminder-empty-inventory",
            ReminderKind::PendingInviteStale => "reminder-invite-stale",
            ReminderKind::NewDamage => "reminder-damage-new",
            ReminderKind::FixPlannedSoon => "reminder-fix-soon",
            ReminderKind::UrgentDamageUnplanned => "reminder-urgent-unplanned",
            ReminderKind::DamageStale => "reminder-damage-stale",
            ReminderKind::FixedByTenant => "reminder-fixed-by-tenant",
            ReminderKind::FixOverdue => "reminder-fix-overdue",
            ReminderKind::AllGood => "reminder-all-good",
            ReminderKind::LeasePastEndDate => "reminder-lease-ended",
        }
    }
}

/// A placeholder value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Text(String),
    Number(i64),
}

/// Placeholder values for one reminder occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    entries: Vec<(&'static str, TemplateValue)>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, TemplateValue::Text(value.into())));
        self
    }

    pub fn property(self, name: &str, id: PropertyId) -> Self {
        self.text("property", name).text("property_id", id.to_string())
    }

    pub fn damage(self, id: DamageId, priority: DamagePriority) -> Self {
        self.text("damage_id", id.to_string())
            .text("priority", priority.as_str())
    }

    pub fn room(self, name: &str) -> Self {
        self.text("room", name)
    }

    pub fn days(mut self, days: i64) -> Self {
        self.entries.push(("days", TemplateValue::Number(days)));
        self
    }

    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TemplateValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

/// A fired rule, before localization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub kind: ReminderKind,
    pub priority: ReminderPriority,
    pub values: TemplateValues,
}

/// A localized reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub priority: ReminderPriority,
    pub title: String,
    pub advice: String,
    pub link: String,
}
