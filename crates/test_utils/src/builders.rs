//! Test Data Builders
//!
//! Builders for the property graph with sensible defaults, so tests only
//! spell out the fields a rule looks at.

use chrono::{DateTime, Utc};
use core_kernel::{LeaseId, PropertyId, ReportId, RoomId, UserId};
use domain_damage::{Damage, DamagePriority};
use domain_property::{
    InventoryReportRef, Lease, PendingInvite, Property, ReportKind, Room, RoomKind, TenantSummary,
};

use crate::fixtures::{IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for damages
pub struct DamageBuilder {
    damage: Damage,
}

impl Default for DamageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageBuilder {
    /// An unread, medium priority damage reported yesterday
    pub fn new() -> Self {
        Self {
            damage: Damage::report(
                LeaseId::new_v7(),
                RoomId::new_v7(),
                StringFixtures::damage_comment(),
                DamagePriority::Medium,
                Vec::new(),
                TemporalFixtures::days_ago(1),
            ),
        }
    }

    pub fn priority(mut self, priority: DamagePriority) -> Self {
        self.damage.priority = priority;
        self
    }

    pub fn read(mut self) -> Self {
        self.damage.read = true;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.damage.created_at = at;
        self.damage.updated_at = at;
        self
    }

    pub fn planned_at(mut self, at: DateTime<Utc>) -> Self {
        self.damage.fix_planned_at = Some(at);
        self
    }

    pub fn in_room(mut self, room_id: RoomId) -> Self {
        self.damage.room_id = room_id;
        self
    }

    pub fn pictures(mut self, pictures: &[&str]) -> Self {
        self.damage.pictures = pictures.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn fixed_by_tenant(mut self) -> Self {
        self.damage.fixed_by_tenant = true;
        self
    }

    pub fn fixed_by_owner(mut self) -> Self {
        self.damage.fixed_by_owner = true;
        self
    }

    /// Both confirmations, with `fixed_at` set
    pub fn fixed(mut self) -> Self {
        self.damage.fixed_by_tenant = true;
        self.damage.fixed_by_owner = true;
        self.damage.fixed_at = Some(TemporalFixtures::days_ago(1));
        self
    }

    pub fn build(self) -> Damage {
        self.damage
    }
}

/// Builder for leases
pub struct LeaseBuilder {
    tenant: TenantSummary,
    active: bool,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    damages: Vec<Damage>,
    reports: Vec<InventoryReportRef>,
}

impl Default for LeaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaseBuilder {
    /// An active, open-ended lease with a start inventory report
    pub fn new() -> Self {
        Self {
            tenant: IdFixtures::tenant(),
            active: true,
            start_date: TemporalFixtures::lease_start(),
            end_date: None,
            damages: Vec::new(),
            reports: vec![InventoryReportRef {
                id: ReportId::new_v7(),
                kind: ReportKind::Start,
                created_at: TemporalFixtures::lease_start(),
            }],
        }
    }

    pub fn tenant(mut self, tenant: TenantSummary) -> Self {
        self.tenant = tenant;
        self
    }

    /// Uses a fresh tenant with the given name
    pub fn tenant_named(mut self, name: &str) -> Self {
        self.tenant = TenantSummary {
            id: UserId::new_v7(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        };
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn ends_at(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn without_reports(mut self) -> Self {
        self.reports.clear();
        self
    }

    pub fn damage(mut self, damage: Damage) -> Self {
        self.damages.push(damage);
        self
    }

    /// Builds the lease for `property_id`, relinking damages to it
    pub fn build_for(self, property_id: PropertyId) -> Lease {
        let start = match self.end_date {
            Some(end) if end <= self.start_date => end - chrono::Duration::days(365),
            _ => self.start_date,
        };
        let id = LeaseId::new_v7();

        Lease {
            id,
            property_id,
            tenant: self.tenant,
            active: self.active,
            start_date: start,
            end_date: self.end_date,
            created_at: start,
            damages: self
                .damages
                .into_iter()
                .map(|mut d| {
                    d.lease_id = id;
                    d
                })
                .collect(),
            reports: self.reports,
        }
    }
}

/// Builder for properties
pub struct PropertyBuilder {
    owner_id: UserId,
    name: String,
    archived: bool,
    created_at: DateTime<Utc>,
    rooms: Vec<(String, RoomKind, Option<RoomId>)>,
    leases: Vec<LeaseBuilder>,
    invite_sent_at: Option<DateTime<Utc>>,
}

impl Default for PropertyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyBuilder {
    /// An empty property created a month ago with one room
    pub fn new() -> Self {
        Self {
            owner_id: IdFixtures::owner_id(),
            name: StringFixtures::property_name().to_string(),
            archived: false,
            created_at: TemporalFixtures::days_ago(30),
            rooms: vec![("Living room".to_string(), RoomKind::LivingRoom, None)],
            leases: Vec::new(),
            invite_sent_at: None,
        }
    }

    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn without_rooms(mut self) -> Self {
        self.rooms.clear();
        self
    }

    pub fn room(mut self, name: &str, kind: RoomKind) -> Self {
        self.rooms.push((name.to_string(), kind, None));
        self
    }

    /// Adds a room with a known id, for damages pointing at it
    pub fn room_with_id(mut self, id: RoomId, name: &str, kind: RoomKind) -> Self {
        self.rooms.push((name.to_string(), kind, Some(id)));
        self
    }

    pub fn lease(mut self, lease: LeaseBuilder) -> Self {
        self.leases.push(lease);
        self
    }

    pub fn invite_sent_at(mut self, at: DateTime<Utc>) -> Self {
        self.invite_sent_at = Some(at);
        self
    }

    pub fn build(self) -> Property {
        let id = PropertyId::new_v7();
        let rooms = self
            .rooms
            .into_iter()
            .map(|(name, kind, room_id)| {
                let mut room = Room::new(id, name, kind);
                if let Some(room_id) = room_id {
                    room.id = room_id;
                }
                room
            })
            .collect();

        Property {
            id,
            owner_id: self.owner_id,
            name: self.name,
            archived: self.archived,
            created_at: self.created_at,
            rooms,
            leases: self.leases.into_iter().map(|l| l.build_for(id)).collect(),
            pending_invite: self.invite_sent_at.map(|sent| PendingInvite {
                tenant_email: StringFixtures::tenant_email().to_string(),
                property_id: id,
                start_date: sent + chrono::Duration::days(30),
                end_date: None,
                created_at: sent,
            }),
        }
    }
}
