//! Repository implementations of the domain store ports
//!
//! One repository per aggregate: items, claims, and the directory
//! entities (users, categories, departments).

pub mod claims;
pub mod directory;
pub mod items;

pub use claims::PgClaimStore;
pub use directory::{PgCategoryStore, PgDepartmentStore, PgUserStore};
pub use items::PgItemStore;
