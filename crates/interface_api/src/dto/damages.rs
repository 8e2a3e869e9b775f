//! Damage DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DamageId, LeaseId, RoomId};
use domain_damage::{Damage, DamagePriority, FixStatus, OwnerDamageUpdate, TenantDamageUpdate};

/// Most pictures a tenant may attach in one request
pub const MAX_PICTURES_PER_REQUEST: u64 = 10;

/// Owner's partial update
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OwnerDamageRequest {
    pub read: Option<bool>,
    pub fix_planned_at: Option<DateTime<Utc>>,
}

impl From<OwnerDamageRequest> for OwnerDamageUpdate {
    fn from(request: OwnerDamageRequest) -> Self {
        OwnerDamageUpdate {
            read: request.read,
            fix_planned_at: request.fix_planned_at,
        }
    }
}

/// Tenant's partial update
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TenantDamageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub comment: Option<String>,
    pub priority: Option<DamagePriority>,
    #[serde(default)]
    #[validate(length(max = MAX_PICTURES_PER_REQUEST))]
    pub add_pictures: Vec<String>,
}

impl From<TenantDamageRequest> for TenantDamageUpdate {
    fn from(request: TenantDamageRequest) -> Self {
        TenantDamageUpdate {
            comment: request.comment,
            priority: request.priority,
            add_pictures: request.add_pictures,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResponse {
    pub id: DamageId,
    pub lease_id: LeaseId,
    pub room_id: RoomId,
    pub comment: String,
    pub priority: DamagePriority,
    pub read: bool,
    pub fixed_by_tenant: bool,
    pub fixed_by_owner: bool,
    pub status: FixStatus,
    pub fix_planned_at: Option<DateTime<Utc>>,
    pub fixed_at: Option<DateTime<Utc>>,
    pub pictures: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Damage> for DamageResponse {
    fn from(damage: Damage) -> Self {
        Self {
            status: damage.status(),
            id: damage.id,
            lease_id: damage.lease_id,
            room_id: damage.room_id,
            comment: damage.comment,
            priority: damage.priority,
            read: damage.read,
            fixed_by_tenant: damage.fixed_by_tenant,
            fixed_by_owner: damage.fixed_by_owner,
            fix_planned_at: damage.fix_planned_at,
            fixed_at: damage.fixed_at,
            pictures: damage.pictures,
            created_at: damage.created_at,
            updated_at: damage.updated_at,
        }
    }
}
