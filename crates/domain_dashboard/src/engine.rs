//! Reminder engine
//!
//! One pass over the owner's graph: every property runs the property rules,
//! every damage not yet fixed by the owner runs the damage rules, and the
//! dashboard counters are filled along the way. Occurrences are then
//! localized and stable-sorted by priority.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, instrument};

use domain_property::{ensure_single_active_lease_per_tenant, Property};

use crate::catalog::{DamageContext, PropertyContext, DAMAGE_RULES, PROPERTY_RULES};
use crate::dashboard::{Dashboard, DashboardOpenDamages, DashboardProperties};
use crate::error::DashboardError;
use crate::language::Language;
use crate::localizer::Localizer;
use crate::reminder::{Occurrence, ReminderKind, ReminderPriority, TemplateValues};

/// Unlocalized result of a traversal
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub occurrences: Vec<Occurrence>,
    pub properties: DashboardProperties,
    pub open_damages: DashboardOpenDamages,
}

/// Builds owner dashboards
#[derive(Debug, Clone)]
pub struct ReminderEngine {
    localizer: Arc<Localizer>,
}

impl ReminderEngine {
    pub fn new(localizer: Arc<Localizer>) -> Self {
        Self { localizer }
    }

    /// Runs the catalog over `properties` without localizing
    ///
    /// Never returns an empty occurrence list: when no rule fires the single
    /// all-good occurrence is emitted. Occurrences are in encounter order.
    ///
    /// # Errors
    ///
    /// `PreconditionViolation` when a property, or a tenant across the
    /// properties, has more than one active lease.
    pub fn evaluate(
        &self,
        properties: &[Property],
        now: DateTime<Utc>,
    ) -> Result<Evaluation, DashboardError> {
        ensure_single_active_lease_per_tenant(properties).map_err(|violation| {
            error!(invariant = violation.invariant, detail = %violation.detail, "Owner graph is inconsistent");
            violation
        })?;

        let mut evaluation = Evaluation::default();

        for property in properties {
            let active_lease = property.active_lease().map_err(|violation| {
                error!(property_id = %property.id, detail = %violation.detail, "Property has several active leases");
                violation
            })?;
            evaluation.properties.record(property, active_lease, now);

            let ctx = PropertyContext {
                property,
                active_lease,
                now,
            };
            evaluation
                .occurrences
                .extend(PROPERTY_RULES.iter().filter_map(|rule| rule.evaluate(&ctx)));

            for lease in &property.leases {
                for damage in lease.damages_pending_owner() {
                    evaluation
                        .open_damages
                        .record(property, lease, damage, now);

                    let ctx = DamageContext {
                        property,
                        lease,
                        damage,
                        room: property.room(damage.room_id),
                        now,
                    };
                    evaluation
                        .occurrences
                        .extend(DAMAGE_RULES.iter().filter_map(|rule| rule.evaluate(&ctx)));
                }
            }
        }

        if evaluation.occurrences.is_empty() {
            evaluation.occurrences.push(Occurrence {
                kind: ReminderKind::AllGood,
                priority: ReminderPriority::Low,
                values: TemplateValues::new(),
            });
        }

        Ok(evaluation)
    }

    /// Builds the dashboard for an owner's properties
    ///
    /// # Errors
    ///
    /// * `PreconditionViolation` - duplicate active leases; fatal
    /// * `Localization` - a reminder failed to render
    #[instrument(skip(self, properties), fields(properties = properties.len(), lang = lang.code()))]
    pub fn build_dashboard(
        &self,
        properties: &[Property],
        lang: Language,
        now: DateTime<Utc>,
    ) -> Result<Dashboard, DashboardError> {
        let evaluation = self.evaluate(properties, now)?;
        let translator = self.localizer.translator(lang)?;

        let mut reminders = evaluation
            .occurrences
            .iter()
            .map(|occurrence| translator.render(occurrence))
            .collect::<Result<Vec<_>, _>>()?;
        reminders.sort_by_key(|r| r.priority.rank());

        debug!(
            reminders = reminders.len(),
            open_damages = evaluation.open_damages.total,
            "Dashboard built"
        );

        Ok(Dashboard {
            reminders,
            properties: evaluation.properties,
            open_damages: evaluation.open_damages,
        })
    }
}
