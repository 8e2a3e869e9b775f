//! Property aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{PreconditionViolation, PropertyId, RoomId, UserId};

use crate::invite::PendingInvite;
use crate::lease::Lease;
use crate::room::Room;

/// Invariant name reported when a property has several active leases
pub const SINGLE_ACTIVE_LEASE_PER_PROPERTY: &str = "single_active_lease_per_property";

/// A property owned by a user, hydrated with its rooms, leases and invite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub name: String,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub rooms: Vec<Room>,
    pub leases: Vec<Lease>,
    pub pending_invite: Option<PendingInvite>,
}

impl Property {
    /// Creates an empty, unarchived property
    pub fn new(owner_id: UserId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: PropertyId::new_v7(),
            owner_id,
            name: name.into(),
            archived: false,
            created_at: now,
            rooms: Vec::new(),
            leases: Vec::new(),
            pending_invite: None,
        }
    }

    /// Returns the single active lease, if any
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` when more than one lease is active.
    pub fn active_lease(&self) -> Result<Option<&Lease>, PreconditionViolation> {
        let mut active = self.leases.iter().filter(|l| l.active);
        let first = active.next();

        if let Some(second) = active.next() {
            return Err(PreconditionViolation::new(
                SINGLE_ACTIVE_LEASE_PER_PROPERTY,
                format!(
                    "property {} has active leases {} and {}",
                    self.id,
                    first.map(|l| l.id.to_string()).unwrap_or_default(),
                    second.id
                ),
            ));
        }
        Ok(first)
    }

    /// True when the property has an active lease
    pub fn is_occupied(&self) -> Result<bool, PreconditionViolation> {
        Ok(self.active_lease()?.is_some())
    }

    /// True when there is neither an active lease nor a pending invite
    pub fn is_available(&self) -> Result<bool, PreconditionViolation> {
        Ok(self.active_lease()?.is_none() && self.pending_invite.is_none())
    }

    /// Looks up a room by id
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
