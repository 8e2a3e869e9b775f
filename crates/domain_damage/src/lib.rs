//! Damage Domain
//!
//! This crate implements the lifecycle of a damage reported by a tenant, from
//! the initial report through the two-party fix confirmation.
//!
//! # Fix Lifecycle
//!
//! ```text
//! Open -> PartiallyFixed -> Fixed
//! ```
//!
//! A damage becomes `Fixed` only once both the tenant and the owner have
//! confirmed the fix. `Fixed` is terminal: the damage is immutable afterwards.
//! While open, each party may only touch its own fields, which is expressed
//! by two narrow command types rather than one generic patch.

pub mod damage;
pub mod update;
pub mod condition;
pub mod ports;
pub mod service;
pub mod error;

pub use damage::{Damage, DamagePriority, FixRole, FixStatus};
pub use update::{OwnerDamageUpdate, TenantDamageUpdate};
pub use condition::{ConditionAssessment, ConditionState, Cleanliness, ConditionParseError};
pub use ports::DamagePort;
pub use service::DamageService;
pub use error::DamageError;
