//! Core Kernel - Foundational types for the campus lost-and-found registry
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed entity identifiers
//! - The shared registry error taxonomy
//! - Port abstractions for swappable storage adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{ItemId, ClaimId, UserId, CategoryId, DepartmentId};
pub use error::RegistryError;
pub use ports::{PortError, DomainPort};
