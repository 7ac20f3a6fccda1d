//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL adapters for the registry's store
//! ports, implemented with SQLx over a shared connection pool.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository implements
//! the store trait of one domain crate, hiding query and transaction
//! details from the lifecycle services. The claim repository owns the
//! transactions that couple claim writes to item status transitions.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PgItemStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/campus_finder")).await?;
//! run_migrations(&pool).await?;
//! let items = PgItemStore::new(pool.clone());
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{
    PgCategoryStore, PgClaimStore, PgDepartmentStore, PgItemStore, PgUserStore,
};
