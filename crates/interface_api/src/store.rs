//! In-memory repository adapter
//!
//! Holds whole property graphs and serves both the property and the damage
//! ports from them. Saving a damage writes it back into its lease. Picture
//! references are unique across the store; a duplicate is a `Conflict`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, DamageId, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata,
    PortError, PropertyId, UserId,
};
use domain_damage::{Damage, DamagePort};
use domain_property::{DamageLocation, Property, PropertyPort};

/// Shared in-memory property graph store
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    properties: Arc<RwLock<HashMap<PropertyId, Property>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces whole property graphs
    pub async fn seed(&self, properties: Vec<Property>) {
        let mut store = self.properties.write().await;
        for property in properties {
            store.insert(property.id, property);
        }
    }

    pub async fn property_count(&self) -> usize {
        self.properties.read().await.len()
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl PropertyPort for InMemoryStore {
    async fn list_owner_properties(
        &self,
        owner_id: UserId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Vec<Property>, PortError> {
        let store = self.properties.read().await;
        let mut owned: Vec<Property> = store
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn locate_damage(
        &self,
        damage_id: DamageId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<DamageLocation, PortError> {
        let store = self.properties.read().await;
        for property in store.values() {
            for lease in &property.leases {
                if let Some(damage) = lease.damages.iter().find(|d| d.id == damage_id) {
                    return Ok(DamageLocation {
                        damage: damage.clone(),
                        property_id: property.id,
                        owner_id: property.owner_id,
                        tenant_id: lease.tenant.id,
                    });
                }
            }
        }
        Err(PortError::not_found("Damage", damage_id))
    }
}

#[async_trait]
impl DamagePort for InMemoryStore {
    async fn get_damage(
        &self,
        id: DamageId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Damage, PortError> {
        Ok(self.locate_damage(id, metadata).await?.damage)
    }

    async fn save_damage(
        &self,
        damage: &Damage,
        _metadata: Option<OperationMetadata>,
    ) -> Result<Damage, PortError> {
        let mut store = self.properties.write().await;

        let mut seen = HashSet::new();
        for picture in &damage.pictures {
            if picture.trim().is_empty() {
                return Err(PortError::validation("pictures", "empty picture reference"));
            }
            if !seen.insert(picture.as_str()) {
                return Err(PortError::conflict(format!("picture {} linked twice", picture)));
            }
        }
        let linked_elsewhere = store
            .values()
            .flat_map(|p| p.leases.iter())
            .flat_map(|l| l.damages.iter())
            .filter(|other| other.id != damage.id)
            .flat_map(|other| other.pictures.iter())
            .find(|picture| seen.contains(picture.as_str()));
        if let Some(picture) = linked_elsewhere {
            return Err(PortError::conflict(format!(
                "picture {} already linked to another damage",
                picture
            )));
        }

        let lease = store
            .values_mut()
            .flat_map(|p| p.leases.iter_mut())
            .find(|l| l.id == damage.lease_id)
            .ok_or_else(|| PortError::not_found("Lease", damage.lease_id))?;

        match lease.damages.iter_mut().find(|d| d.id == damage.id) {
            Some(existing) => *existing = damage.clone(),
            None => lease.damages.push(damage.clone()),
        }
        Ok(damage.clone())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryStore {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Utc::now();
        let count = self.property_count().await;

        HealthCheckResult {
            adapter_id: "in_memory_store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: (Utc::now() - started).num_milliseconds().max(0) as u64,
            message: Some(format!("{} properties", count)),
            checked_at: Utc::now(),
        }
    }
}
