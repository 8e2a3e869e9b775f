//! Core Kernel - Foundational types and utilities for the property management system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for properties, leases, rooms and damages
//! - Time helpers shared by the damage lifecycle and the reminder engine
//! - Port abstractions and the error categories every adapter speaks

pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use temporal::{Clock, SystemClock, FixedClock, TemporalError};
pub use identifiers::{
    PropertyId, LeaseId, DamageId, RoomId, FurnitureId, UserId, ReportId,
};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth, OperationMetadata};
pub use error::{CoreError, PreconditionViolation};
