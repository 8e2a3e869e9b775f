//! Damage Domain Ports
//!
//! The damage lifecycle is pure; persisting its result goes through the
//! `DamagePort`. Storage owns concurrency control: it reports uniqueness or
//! optimistic-write violations as `PortError::Conflict`, which the service
//! hands back to its caller untouched.

use async_trait::async_trait;

use core_kernel::{DamageId, DomainPort, OperationMetadata, PortError};

use crate::damage::Damage;

/// Storage operations the damage domain needs
#[async_trait]
pub trait DamagePort: DomainPort {
    /// Retrieves a damage by ID
    async fn get_damage(
        &self,
        id: DamageId,
        metadata: Option<OperationMetadata>,
    ) -> Result<Damage, PortError>;

    /// Persists the full damage state and returns what was stored
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` when the write violates a uniqueness constraint,
    /// e.g. a picture reference already linked elsewhere.
    async fn save_damage(
        &self,
        damage: &Damage,
        metadata: Option<OperationMetadata>,
    ) -> Result<Damage, PortError>;
}

/// In-memory implementation of DamagePort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory damage store enforcing unique picture linkage
    #[derive(Debug, Default, Clone)]
    pub struct MockDamagePort {
        damages: Arc<RwLock<HashMap<DamageId, Damage>>>,
    }

    impl MockDamagePort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with damages for testing
        pub async fn with_damages(damages: Vec<Damage>) -> Self {
            let port = Self::new();
            for damage in damages {
                port.damages.write().await.insert(damage.id, damage);
            }
            port
        }
    }

    impl DomainPort for MockDamagePort {}

    #[async_trait]
    impl DamagePort for MockDamagePort {
        async fn get_damage(
            &self,
            id: DamageId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Damage, PortError> {
            self.damages
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Damage", id))
        }

        async fn save_damage(
            &self,
            damage: &Damage,
            _metadata: Option<OperationMetadata>,
        ) -> Result<Damage, PortError> {
            let mut damages = self.damages.write().await;

            let mut seen = HashSet::new();
            for picture in &damage.pictures {
                if !seen.insert(picture.as_str()) {
                    return Err(PortError::conflict(format!("picture {} linked twice", picture)));
                }
                let linked_elsewhere = damages
                    .values()
                    .any(|other| other.id != damage.id && other.pictures.contains(picture));
                if linked_elsewhere {
                    return Err(PortError::conflict(format!(
                        "picture {} already linked to another damage",
                        picture
                    )));
                }
            }

            damages.insert(damage.id, damage.clone());
            Ok(damage.clone())
        }
    }
}
