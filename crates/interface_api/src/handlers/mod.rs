//! Request handlers

pub mod claims;
pub mod directory;
pub mod health;
pub mod items;
