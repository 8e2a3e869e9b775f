//! Tests for the damage fix lifecycle and role-scoped updates

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use core_kernel::{LeaseId, RoomId};
use domain_damage::{
    Damage, DamageError, DamagePriority, FixRole, FixStatus, OwnerDamageUpdate,
    TenantDamageUpdate,
};
use test_utils::{
    assert_fix_invariant, damage_priority_strategy, damage_strategy, fix_role_strategy,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 12, 10, 30, 45).unwrap()
}

fn open_damage() -> Damage {
    Damage::report(
        LeaseId::new_v7(),
        RoomId::new_v7(),
        "Mould on the bathroom ceiling",
        DamagePriority::Medium,
        vec!["pictures/a.jpg".to_string()],
        now() - Duration::days(3),
    )
}

fn fixed_damage() -> Damage {
    let mut damage = open_damage();
    damage.mark_fixed(FixRole::Tenant, now()).unwrap();
    damage.mark_fixed(FixRole::Owner, now()).unwrap();
    damage
}

// ============================================================================
// Fix confirmation
// ============================================================================

mod fix_confirmation {
    use super::*;

    #[test]
    fn test_status_transitions() {
        let mut damage = open_damage();
        assert_eq!(damage.status(), FixStatus::Open);

        assert!(damage.mark_fixed(FixRole::Owner, now()).unwrap());
        assert_eq!(damage.status(), FixStatus::PartiallyFixed);
        assert!(damage.fixed_at.is_none());

        assert!(damage.mark_fixed(FixRole::Tenant, now()).unwrap());
        assert_eq!(damage.status(), FixStatus::Fixed);
        assert!(damage.fixed_at.is_some());
    }

    #[test]
    fn test_same_role_twice_is_a_noop() {
        let mut damage = open_damage();
        damage.mark_fixed(FixRole::Tenant, now()).unwrap();
        let snapshot = damage.clone();

        let changed = damage
            .mark_fixed(FixRole::Tenant, now() + Duration::hours(1))
            .unwrap();

        assert!(!changed);
        assert_eq!(damage, snapshot);
    }

    #[test]
    fn test_confirming_fixed_damage_is_rejected_for_both_roles() {
        for role in [FixRole::Tenant, FixRole::Owner] {
            let mut damage = fixed_damage();
            let fixed_at = damage.fixed_at;

            let result = damage.mark_fixed(role, now() + Duration::days(1));

            assert!(matches!(result, Err(DamageError::AlreadyFixed)));
            assert_eq!(damage.fixed_at, fixed_at);
        }
    }

    #[test]
    fn test_fixed_at_is_truncated_to_the_minute() {
        let damage = fixed_damage();
        assert_eq!(
            damage.fixed_at,
            Some(Utc.with_ymd_and_hms(2024, 4, 12, 10, 30, 0).unwrap())
        );
    }
}

// ============================================================================
// Role-scoped updates
// ============================================================================

mod updates {
    use super::*;

    #[test]
    fn test_owner_update_leaves_absent_fields_unchanged() {
        let mut damage = open_damage();
        damage.apply_owner_update(&OwnerDamageUpdate::mark_read(), now()).unwrap();

        assert!(damage.read);
        assert!(damage.fix_planned_at.is_none());

        let planned = now() + Duration::days(4);
        damage.apply_owner_update(&OwnerDamageUpdate::plan_fix(planned), now()).unwrap();

        assert!(damage.read);
        assert_eq!(damage.fix_planned_at, Some(planned));
    }

    #[test]
    fn test_tenant_update_appends_pictures() {
        let mut damage = open_damage();
        let update = TenantDamageUpdate {
            comment: Some("Spreading to the wall".to_string()),
            priority: Some(DamagePriority::Urgent),
            add_pictures: vec!["pictures/b.jpg".to_string(), "pictures/c.jpg".to_string()],
        };

        damage.apply_tenant_update(update, now()).unwrap();

        assert_eq!(damage.comment, "Spreading to the wall");
        assert_eq!(damage.priority, DamagePriority::Urgent);
        assert_eq!(
            damage.pictures,
            vec!["pictures/a.jpg", "pictures/b.jpg", "pictures/c.jpg"]
        );
        assert_eq!(damage.updated_at, now());
    }

    #[test]
    fn test_empty_tenant_update_keeps_fields() {
        let mut damage = open_damage();
        let before = damage.clone();
        let update = TenantDamageUpdate::default();
        assert!(update.is_empty());

        let changed = damage.apply_tenant_update(update, now()).unwrap();

        assert!(!changed);
        assert_eq!(damage, before);
    }

    #[test]
    fn test_partially_fixed_damage_is_still_updatable() {
        let mut damage = open_damage();
        damage.mark_fixed(FixRole::Tenant, now()).unwrap();

        assert!(damage.apply_owner_update(&OwnerDamageUpdate::mark_read(), now()).is_ok());
    }

    #[test]
    fn test_update_deserializes_from_camel_case() {
        let update: OwnerDamageUpdate =
            serde_json::from_str(r#"{"fixPlannedAt":"2024-04-20T08:00:00Z"}"#).unwrap();

        assert_eq!(update.read, None);
        assert_eq!(
            update.fix_planned_at,
            Some(Utc.with_ymd_and_hms(2024, 4, 20, 8, 0, 0).unwrap())
        );
    }
}

// ============================================================================
// Properties
// ============================================================================

fn owner_update_strategy() -> impl Strategy<Value = OwnerDamageUpdate> {
    (proptest::option::of(any::<bool>()), proptest::option::of(0i64..30)).prop_map(
        |(read, days)| OwnerDamageUpdate {
            read,
            fix_planned_at: days.map(|d| now() + Duration::days(d)),
        },
    )
}

fn tenant_update_strategy() -> impl Strategy<Value = TenantDamageUpdate> {
    (
        proptest::option::of("[a-z ]{0,20}"),
        proptest::option::of(damage_priority_strategy()),
        proptest::collection::vec("[a-z]{1,8}\\.jpg", 0..3),
    )
        .prop_map(|(comment, priority, add_pictures)| TenantDamageUpdate {
            comment,
            priority,
            add_pictures,
        })
}

proptest! {
    #[test]
    fn prop_fixed_at_iff_both_flags(roles in proptest::collection::vec(fix_role_strategy(), 0..6)) {
        let mut damage = open_damage();
        for (i, role) in roles.into_iter().enumerate() {
            let _ = damage.mark_fixed(role, now() + Duration::minutes(i as i64));
            assert_fix_invariant(&damage);
        }
    }

    #[test]
    fn prop_confirmations_keep_generated_damages_consistent(
        mut damage in damage_strategy(),
        roles in proptest::collection::vec(fix_role_strategy(), 1..4),
    ) {
        assert_fix_invariant(&damage);
        for role in roles {
            let was_fixed = damage.is_fixed();
            let result = damage.mark_fixed(role, now());
            prop_assert_eq!(result.is_err(), was_fixed);
            assert_fix_invariant(&damage);
        }
    }

    #[test]
    fn prop_fixed_damage_rejects_every_owner_update(update in owner_update_strategy()) {
        let mut damage = fixed_damage();
        let before = damage.clone();

        let result = damage.apply_owner_update(&update, now());

        prop_assert!(matches!(result, Err(DamageError::CannotUpdateFixedDamage)));
        prop_assert_eq!(damage, before);
    }

    #[test]
    fn prop_fixed_damage_rejects_every_tenant_update(update in tenant_update_strategy()) {
        let mut damage = fixed_damage();
        let before = damage.clone();

        let result = damage.apply_tenant_update(update, now());

        prop_assert!(matches!(result, Err(DamageError::CannotUpdateFixedDamage)));
        prop_assert_eq!(damage, before);
    }
}
