//! Damage application service
//!
//! Loads nothing on its own: callers hand over the damage they already
//! fetched, the service applies the role-specific transition and persists it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use core_kernel::{Clock, DamageId, OperationMetadata, SystemClock};

use crate::damage::{Damage, FixRole};
use crate::error::DamageError;
use crate::ports::DamagePort;
use crate::update::{OwnerDamageUpdate, TenantDamageUpdate};

/// Orchestrates damage transitions and their persistence
#[derive(Clone)]
pub struct DamageService {
    port: Arc<dyn DamagePort>,
    clock: Arc<dyn Clock>,
}

impl DamageService {
    /// Creates a service using the system clock
    pub fn new(port: Arc<dyn DamagePort>) -> Self {
        Self::with_clock(port, Arc::new(SystemClock))
    }

    /// Creates a service with an explicit clock
    pub fn with_clock(port: Arc<dyn DamagePort>, clock: Arc<dyn Clock>) -> Self {
        Self { port, clock }
    }

    /// Loads a damage through the port
    pub async fn get(&self, id: DamageId) -> Result<Damage, DamageError> {
        Ok(self.port.get_damage(id, None).await?)
    }

    /// Confirms the fix for `role`
    ///
    /// A repeated confirmation by the same role is accepted without a write.
    ///
    /// # Errors
    ///
    /// * `AlreadyFixed` - both parties had already confirmed
    /// * `Conflict` - storage rejected the write
    pub async fn mark_fixed(&self, mut damage: Damage, role: FixRole) -> Result<Damage, DamageError> {
        let changed = damage.mark_fixed(role, self.clock.now()).map_err(|e| {
            warn!(damage_id = %damage.id, ?role, "Fix confirmation on a fixed damage");
            e
        })?;

        if !changed {
            debug!(damage_id = %damage.id, ?role, "Fix already confirmed by this role");
            return Ok(damage);
        }

        let saved = self.persist(&damage, role).await?;
        info!(
            damage_id = %saved.id,
            ?role,
            status = ?saved.status(),
            "Damage fix confirmed"
        );
        Ok(saved)
    }

    /// Applies the owner's update; an update that changes nothing is not
    /// written
    ///
    /// # Errors
    ///
    /// * `CannotUpdateFixedDamage` - the damage is fixed
    /// * `Conflict` - storage rejected the write
    pub async fn update_as_owner(
        &self,
        mut damage: Damage,
        update: OwnerDamageUpdate,
    ) -> Result<Damage, DamageError> {
        if !damage.apply_owner_update(&update, self.clock.now())? {
            debug!(damage_id = %damage.id, "Owner update changes nothing");
            return Ok(damage);
        }
        let saved = self.persist(&damage, FixRole::Owner).await?;
        debug!(damage_id = %saved.id, read = saved.read, "Damage updated by owner");
        Ok(saved)
    }

    /// Applies the tenant's update; an update that changes nothing is not
    /// written
    ///
    /// # Errors
    ///
    /// * `CannotUpdateFixedDamage` - the damage is fixed
    /// * `Conflict` - storage rejected the write, e.g. a duplicate picture
    pub async fn update_as_tenant(
        &self,
        mut damage: Damage,
        update: TenantDamageUpdate,
    ) -> Result<Damage, DamageError> {
        let added = update.add_pictures.len();
        if !damage.apply_tenant_update(update, self.clock.now())? {
            debug!(damage_id = %damage.id, "Tenant update changes nothing");
            return Ok(damage);
        }
        let saved = self.persist(&damage, FixRole::Tenant).await?;
        debug!(damage_id = %saved.id, pictures_added = added, "Damage updated by tenant");
        Ok(saved)
    }

    async fn persist(&self, damage: &Damage, role: FixRole) -> Result<Damage, DamageError> {
        let metadata = OperationMetadata::default()
            .with_context("role", format!("{:?}", role).to_lowercase());

        self.port
            .save_damage(damage, Some(metadata))
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    warn!(damage_id = %damage.id, error = %e, "Damage write conflicted");
                }
                DamageError::from(e)
            })
    }
}
