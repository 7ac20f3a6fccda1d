//! Directory domain ports

use async_trait::async_trait;

use core_kernel::{CategoryId, DepartmentId, DomainPort, PortError, UserId};

use crate::category::Category;
use crate::department::Department;
use crate::user::User;

/// Store operations for user accounts
#[async_trait]
pub trait UserStore: DomainPort {
    async fn get(&self, id: UserId) -> Result<User, PortError>;

    /// Looks up an account by email or username (login identifier)
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, PortError>;

    /// Persists a new account; duplicate email/username is a Conflict
    async fn insert(&self, user: User) -> Result<User, PortError>;

    async fn update(&self, user: User) -> Result<User, PortError>;

    async fn delete(&self, id: UserId) -> Result<(), PortError>;

    async fn list(&self) -> Result<Vec<User>, PortError>;
}

/// Store operations for categories
#[async_trait]
pub trait CategoryStore: DomainPort {
    async fn get(&self, id: CategoryId) -> Result<Category, PortError>;
    async fn insert(&self, category: Category) -> Result<Category, PortError>;
    async fn update(&self, category: Category) -> Result<Category, PortError>;
    async fn delete(&self, id: CategoryId) -> Result<(), PortError>;
    async fn list(&self) -> Result<Vec<Category>, PortError>;
}

/// Store operations for departments
#[async_trait]
pub trait DepartmentStore: DomainPort {
    async fn get(&self, id: DepartmentId) -> Result<Department, PortError>;
    async fn insert(&self, department: Department) -> Result<Department, PortError>;
    async fn update(&self, department: Department) -> Result<Department, PortError>;
    async fn delete(&self, id: DepartmentId) -> Result<(), PortError>;
    async fn list(&self) -> Result<Vec<Department>, PortError>;
}
