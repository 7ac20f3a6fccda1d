//! Request/response data transfer objects

pub mod claims;
pub mod directory;
pub mod items;
