//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit tests. Every timestamp is derived
//! from a single pinned "now" so rules with day windows stay deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::UserId;
use domain_property::TenantSummary;
use uuid::Uuid;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every test evaluates against (Mar 14, 2024 10:30 UTC)
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 10, 30, 0).unwrap()
    }

    /// `days` whole days before now
    pub fn days_ago(days: i64) -> DateTime<Utc> {
        Self::now() - Duration::days(days)
    }

    /// `days` whole days after now
    pub fn in_days(days: i64) -> DateTime<Utc> {
        Self::now() + Duration::days(days)
    }

    /// Default lease start, well before now
    pub fn lease_start() -> DateTime<Utc> {
        Self::days_ago(180)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn property_name() -> &'static str {
        "Appartement Bastille"
    }

    pub fn tenant_name() -> &'static str {
        "Jeanne Dupont"
    }

    pub fn tenant_email() -> &'static str {
        "jeanne.dupont@example.com"
    }

    pub fn damage_comment() -> &'static str {
        "Water leak under the kitchen sink"
    }
}

/// Fixture for ID test data
pub struct IdFixtures;

impl IdFixtures {
    /// A stable owner id
    pub fn owner_id() -> UserId {
        UserId::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001))
    }

    /// A stable tenant id
    pub fn tenant_id() -> UserId {
        UserId::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0002))
    }

    /// The default tenant summary
    pub fn tenant() -> TenantSummary {
        TenantSummary {
            id: Self::tenant_id(),
            name: StringFixtures::tenant_name().to_string(),
            email: StringFixtures::tenant_email().to_string(),
        }
    }
}
