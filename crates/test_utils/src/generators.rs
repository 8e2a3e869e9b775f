//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::Duration;
use domain_damage::{Damage, DamagePriority, FixRole};
use proptest::prelude::*;

use crate::builders::{DamageBuilder, LeaseBuilder, PropertyBuilder};
use crate::fixtures::TemporalFixtures;
use domain_property::Property;

/// Strategy for damage priorities
pub fn damage_priority_strategy() -> impl Strategy<Value = DamagePriority> {
    prop_oneof![
        Just(DamagePriority::Low),
        Just(DamagePriority::Medium),
        Just(DamagePriority::High),
        Just(DamagePriority::Urgent),
    ]
}

/// Strategy for fix roles
pub fn fix_role_strategy() -> impl Strategy<Value = FixRole> {
    prop_oneof![Just(FixRole::Tenant), Just(FixRole::Owner)]
}

/// Strategy for day offsets around now, in whole days
pub fn day_offset_strategy() -> impl Strategy<Value = i64> {
    -40i64..40i64
}

/// Strategy for damages in any lifecycle state that respects the fix invariant
pub fn damage_strategy() -> impl Strategy<Value = Damage> {
    (
        damage_priority_strategy(),
        any::<bool>(),
        proptest::option::of(day_offset_strategy()),
        0i64..30,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(priority, read, planned, age, by_tenant, by_owner)| {
            let mut builder = DamageBuilder::new()
                .priority(priority)
                .created_at(TemporalFixtures::days_ago(age));
            if read {
                builder = builder.read();
            }
            if let Some(offset) = planned {
                builder = builder.planned_at(TemporalFixtures::now() + Duration::days(offset));
            }
            builder = match (by_tenant, by_owner) {
                (true, true) => builder.fixed(),
                (true, false) => builder.fixed_by_tenant(),
                (false, true) => builder.fixed_by_owner(),
                (false, false) => builder,
            };
            builder.build()
        })
}

/// Strategy for a consistent property: at most one active lease
pub fn property_strategy() -> impl Strategy<Value = Property> {
    (
        any::<bool>(),
        proptest::option::of(day_offset_strategy()),
        any::<bool>(),
        proptest::collection::vec(damage_strategy(), 0..4),
        proptest::option::of(0i64..20),
        any::<bool>(),
    )
        .prop_map(|(leased, end_offset, with_reports, damages, invite_age, with_rooms)| {
            let mut builder = PropertyBuilder::new();
            if !with_rooms {
                builder = builder.without_rooms();
            }
            if leased {
                let mut lease = LeaseBuilder::new().tenant_named("Random Tenant");
                if let Some(offset) = end_offset {
                    lease = lease.ends_at(TemporalFixtures::now() + Duration::days(offset));
                }
                if !with_reports {
                    lease = lease.without_reports();
                }
                for damage in damages {
                    lease = lease.damage(damage);
                }
                builder = builder.lease(lease);
            } else if let Some(age) = invite_age {
                builder = builder.invite_sent_at(TemporalFixtures::days_ago(age));
            }
            builder.build()
        })
}
