//! Directory Domain
//!
//! Reference entities the registry core validates against: users who report
//! and claim items, plus the category and department lookups used to
//! classify reports. All of it is thin persistence glue; the lifecycle
//! state machines live in `domain_items` and `domain_claims`.

pub mod user;
pub mod category;
pub mod department;
pub mod ports;
pub mod service;

pub use user::{NewUser, User, UserRole};
pub use category::Category;
pub use department::Department;
pub use ports::{CategoryStore, DepartmentStore, UserStore};
pub use service::Directory;
