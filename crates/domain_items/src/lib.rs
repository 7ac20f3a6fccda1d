//! Item Domain
//!
//! This crate implements the lifecycle of reported lost-and-found items.
//!
//! # Item Lifecycle
//!
//! ```text
//! LOST                 (reported lost, stays until admin edit)
//! FOUND -> CLAIMED     (a claim is filed; guarded)
//! CLAIMED -> RETURNED  (claim approved, item handed back)
//! CLAIMED -> FOUND     (claim rejected, item open for claims again)
//! ```

pub mod item;
pub mod ports;
pub mod service;

pub use item::{Item, ItemStatus, NewItem};
pub use ports::{ItemStore, ItemFilter};
pub use service::ItemLifecycle;
