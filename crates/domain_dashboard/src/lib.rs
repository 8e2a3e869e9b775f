//! Dashboard Domain
//!
//! Builds the owner dashboard from a fully hydrated property graph:
//!
//! - a prioritized, localized reminder feed produced by an ordered catalog
//!   of rules (see [`catalog`])
//! - property counters ([`DashboardProperties`])
//! - the open damage summary ([`DashboardOpenDamages`])
//!
//! Everything is computed in memory from the graph and an explicit `now`.
//! Localization resources are parsed once by [`Localizer::load`] and shared
//! read-only between requests.

pub mod reminder;
pub mod catalog;
pub mod language;
pub mod localizer;
pub mod dashboard;
pub mod engine;
pub mod error;

pub use reminder::{Reminder, ReminderKind, ReminderPriority, TemplateValue, TemplateValues, Occurrence};
pub use language::Language;
pub use localizer::{Localizer, Translator};
pub use dashboard::{Dashboard, DashboardProperties, DashboardOpenDamages, OpenDamageEntry};
pub use engine::{ReminderEngine, Evaluation};
pub use error::DashboardError;
