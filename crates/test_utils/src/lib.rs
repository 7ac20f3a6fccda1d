//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the campus-finder test suite.
//!
//! # Modules
//!
//! - `memory`: in-memory adapters implementing every domain store port
//! - `builders`: builder patterns for test data construction
//! - `fixtures`: a pre-wired registry with seeded directory data

pub mod memory;
pub mod builders;
pub mod fixtures;

pub use memory::InMemoryStore;
pub use builders::{ItemBuilder, UserBuilder};
pub use fixtures::TestRegistry;
