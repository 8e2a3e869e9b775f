//! Checks spanning several properties of one owner

use std::collections::HashMap;

use core_kernel::{LeaseId, PreconditionViolation, UserId};

use crate::property::Property;

/// Invariant name reported when a tenant holds several active leases
pub const SINGLE_ACTIVE_LEASE_PER_TENANT: &str = "single_active_lease_per_tenant";

/// Fails when one tenant holds more than one active lease across `properties`
pub fn ensure_single_active_lease_per_tenant(
    properties: &[Property],
) -> Result<(), PreconditionViolation> {
    let mut seen: HashMap<UserId, LeaseId> = HashMap::new();

    let active = properties
        .iter()
        .flat_map(|p| p.leases.iter())
        .filter(|l| l.active);

    for lease in active {
        if let Some(previous) = seen.insert(lease.tenant.id, lease.id) {
            return Err(PreconditionViolation::new(
                SINGLE_ACTIVE_LEASE_PER_TENANT,
                format!(
                    "tenant {} has active leases {} and {}",
                    lease.tenant.id, previous, lease.id
                ),
            ));
        }
    }
    Ok(())
}
