//! Claims Domain
//!
//! This crate implements the lifecycle of ownership claims on found items,
//! from filing through administrative approval or rejection.
//!
//! # Claim Lifecycle
//!
//! ```text
//! PENDING -> APPROVED   (verified = true, item handed back)
//! PENDING -> REJECTED   (verified = false, item reopened for claims)
//! ```
//!
//! Filing a claim and marking the item CLAIMED is one atomic unit; the
//! store commits both or neither.

pub mod claim;
pub mod ports;
pub mod service;

pub use claim::{Claim, ClaimStatus};
pub use ports::{ClaimFilter, ClaimStore};
pub use service::ClaimLifecycle;
