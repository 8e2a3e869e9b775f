//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_damage::Damage;

/// Asserts that `fixed_at` is set exactly when both parties confirmed
///
/// # Panics
///
/// Panics if the fix timestamp disagrees with the confirmation flags
pub fn assert_fix_invariant(damage: &Damage) {
    assert_eq!(
        damage.fixed_at.is_some(),
        damage.fixed_by_tenant && damage.fixed_by_owner,
        "Fix invariant broken for {}: tenant={}, owner={}, fixed_at={:?}",
        damage.id,
        damage.fixed_by_tenant,
        damage.fixed_by_owner,
        damage.fixed_at
    );
}

/// Asserts that a rendered text has no unresolved `{...}` placeholder
pub fn assert_no_placeholders(text: &str) {
    assert!(
        !text.contains('{') && !text.contains('}'),
        "Unresolved placeholder in {:?}",
        text
    );
}

/// Asserts that sort ranks never decrease
///
/// # Panics
///
/// Panics at the first pair where a more pressing item follows a less
/// pressing one
pub fn assert_ranks_sorted(ranks: &[u8]) {
    if let Some(pos) = ranks.windows(2).position(|w| w[0] > w[1]) {
        panic!(
            "Rank {} at index {} follows rank {}: {:?}",
            ranks[pos + 1],
            pos + 1,
            ranks[pos],
            ranks
        );
    }
}
