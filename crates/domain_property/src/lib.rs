//! Property Domain
//!
//! The owner-side graph the dashboard is computed from: properties with their
//! rooms and furniture, leases (each carrying its damages and inventory
//! report references) and the optional pending tenant invite.
//!
//! # Active lease invariant
//!
//! At most one lease is active per property and per tenant. Lease management
//! lives with collaborators; this crate only observes the graph and reports a
//! breach as a [`core_kernel::PreconditionViolation`].
//!
//! ```rust
//! use chrono::Utc;
//! use core_kernel::UserId;
//! use domain_property::Property;
//!
//! let property = Property::new(UserId::new_v7(), "Flat on Rue Oberkampf", Utc::now());
//! assert!(property.active_lease().unwrap().is_none());
//! assert!(property.is_available().unwrap());
//! ```

pub mod property;
pub mod room;
pub mod lease;
pub mod invite;
pub mod graph;
pub mod ports;

pub use property::Property;
pub use room::{Room, RoomKind, Furniture};
pub use lease::{Lease, TenantSummary, InventoryReportRef, ReportKind};
pub use invite::PendingInvite;
pub use graph::ensure_single_active_lease_per_tenant;
pub use ports::{PropertyPort, DamageLocation};
