//! Leases and their inventory report references

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::ensure_ordered;
use core_kernel::{CoreError, LeaseId, PropertyId, ReportId, UserId};
use domain_damage::Damage;

/// Tenant fields the dashboards display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Moment of the lease an inventory report documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Start,
    End,
}

/// Reference to a generated inventory report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReportRef {
    pub id: ReportId,
    pub kind: ReportKind,
    pub created_at: DateTime<Utc>,
}

/// A lease binding one tenant to one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lease {
    pub id: LeaseId,
    pub property_id: PropertyId,
    pub tenant: TenantSummary,
    pub active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Damages reported under this lease
    pub damages: Vec<Damage>,
    pub reports: Vec<InventoryReportRef>,
}

impl Lease {
    /// Creates an active lease with no damages or reports
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the tenant has no email and
    /// `CoreError::Temporal` when `end_date` is not after `start_date`.
    pub fn new(
        property_id: PropertyId,
        tenant: TenantSummary,
        start_date: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if tenant.email.trim().is_empty() {
            return Err(CoreError::validation("tenant email is blank"));
        }
        ensure_ordered(start_date, end_date)?;

        Ok(Self {
            id: LeaseId::new_v7(),
            property_id,
            tenant,
            active: true,
            start_date,
            end_date,
            created_at: now,
            damages: Vec::new(),
            reports: Vec::new(),
        })
    }

    /// Returns true when at least one inventory report exists
    pub fn has_inventory_report(&self) -> bool {
        !self.reports.is_empty()
    }

    /// Damages the owner has not confirmed as fixed yet
    pub fn damages_pending_owner(&self) -> impl Iterator<Item = &Damage> {
        self.damages.iter().filter(|d| !d.fixed_by_owner)
    }
}
