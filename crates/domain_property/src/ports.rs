//! Property Domain Ports
//!
//! Read access to the owner's graph. Writes to the graph itself (property,
//! room and lease management) belong to collaborators.

use async_trait::async_trait;

use core_kernel::{DamageId, DomainPort, OperationMetadata, PortError, PropertyId, UserId};
use domain_damage::Damage;

/// A damage together with the parties allowed to act on it
#[derive(Debug, Clone, PartialEq)]
pub struct DamageLocation {
    pub damage: Damage,
    pub property_id: PropertyId,
    /// Owner of the property the damage was reported on
    pub owner_id: UserId,
    /// Tenant of the lease the damage was reported under
    pub tenant_id: UserId,
}

/// Port for loading property graphs
#[async_trait]
pub trait PropertyPort: DomainPort {
    /// Loads every property of an owner, fully hydrated
    async fn list_owner_properties(
        &self,
        owner_id: UserId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Vec<crate::Property>, PortError>;

    /// Finds a damage and the owner and tenant it belongs to
    async fn locate_damage(
        &self,
        damage_id: DamageId,
        metadata: Option<OperationMetadata>,
    ) -> Result<DamageLocation, PortError>;
}

/// In-memory implementation of PropertyPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use crate::Property;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock property port holding whole graphs
    #[derive(Debug, Default, Clone)]
    pub struct MockPropertyPort {
        properties: Arc<RwLock<HashMap<PropertyId, Property>>>,
    }

    impl MockPropertyPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with properties for testing
        pub async fn with_properties(properties: Vec<Property>) -> Self {
            let port = Self::new();
            port.insert(properties).await;
            port
        }

        /// Inserts or replaces properties
        pub async fn insert(&self, properties: Vec<Property>) {
            let mut store = self.properties.write().await;
            for property in properties {
                store.insert(property.id, property);
            }
        }
    }

    impl DomainPort for MockPropertyPort {}

    #[async_trait]
    impl PropertyPort for MockPropertyPort {
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
            owned.sort_by_key(|p| p.created_at);
            Ok(owned)
        }

        async fn locate_damage(
            &self,
            damage_id: DamageId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<DamageLocation, PortError> {
            let store = self.properties.read().await;
            store
                .values()
                .flat_map(|p| p.leases.iter().map(move |l| (p, l)))
                .find_map(|(property, lease)| {
                    lease
                        .damages
                        .iter()
                        .find(|d| d.id == damage_id)
                        .map(|damage| DamageLocation {
                            damage: damage.clone(),
                            property_id: property.id,
                            owner_id: property.owner_id,
                            tenant_id: lease.tenant.id,
                        })
                })
                .ok_or_else(|| PortError::not_found("Damage", damage_id))
        }
    }
}
