//! Directory repository implementations
//!
//! Users, categories, and departments are simple single-row aggregates;
//! these adapters are thin CRUD mappings onto their tables. Uniqueness
//! (email, username, lookup names) is enforced by database constraints
//! and surfaces as `PortError::Conflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CategoryId, DepartmentId, DomainPort, PortError, UserId};
use domain_directory::{
    Category, CategoryStore, Department, DepartmentStore, User, UserRole, UserStore,
};

use crate::error::DatabaseError;

const USER_COLUMNS: &str =
    "user_id, email, username, first_name, last_name, role, password_hash, created_at";

/// PostgreSQL adapter for the user store port
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn get(&self, id: UserId) -> Result<User, PortError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.ok_or_else(|| PortError::not_found("User", id))?.try_into()
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, PortError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 OR username = $1"
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, user: User) -> Result<User, PortError> {
        let sql = format!(
            "INSERT INTO users ({USER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {USER_COLUMNS}"
        );
        let row: UserRow = sqlx::query_as(&sql)
            .bind(user.id.as_uuid())
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.as_str())
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.try_into()
    }

    async fn update(&self, user: User) -> Result<User, PortError> {
        let sql = format!(
            "UPDATE users SET \
                 email = $2, username = $3, first_name = $4, last_name = $5, \
                 role = $6, password_hash = $7 \
             WHERE user_id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(user.id.as_uuid())
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.role.as_str())
            .bind(&user.password_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.ok_or_else(|| PortError::not_found("User", user.id))?
            .try_into()
    }

    async fn delete(&self, id: UserId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("User", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, PortError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at");
        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        rows.into_iter().map(User::try_from).collect()
    }
}

impl DomainPort for PgUserStore {}

/// PostgreSQL adapter for the category store port
#[derive(Debug, Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn get(&self, id: CategoryId) -> Result<Category, PortError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "SELECT category_id, name, created_at FROM categories WHERE category_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row.ok_or_else(|| PortError::not_found("Category", id))?.into())
    }

    async fn insert(&self, category: Category) -> Result<Category, PortError> {
        let row: CategoryRow = sqlx::query_as(
            "INSERT INTO categories (category_id, name, created_at) \
             VALUES ($1, $2, $3) \
             RETURNING category_id, name, created_at",
        )
        .bind(category.id.as_uuid())
        .bind(&category.name)
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row.into())
    }

    async fn update(&self, category: Category) -> Result<Category, PortError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "UPDATE categories SET name = $2 WHERE category_id = $1 \
             RETURNING category_id, name, created_at",
        )
        .bind(category.id.as_uuid())
        .bind(&category.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row
            .ok_or_else(|| PortError::not_found("Category", category.id))?
            .into())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), PortError> {
        // items.category_id has no cascade; a referenced category fails
        // with a foreign key violation, surfaced as Conflict
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Category", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Category>, PortError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            "SELECT category_id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(rows.into_iter().map(Category::from).collect())
    }
}

impl DomainPort for PgCategoryStore {}

/// PostgreSQL adapter for the department store port
#[derive(Debug, Clone)]
pub struct PgDepartmentStore {
    pool: PgPool,
}

impl PgDepartmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentStore for PgDepartmentStore {
    async fn get(&self, id: DepartmentId) -> Result<Department, PortError> {
        let row: Option<DepartmentRow> = sqlx::query_as(
            "SELECT department_id, name, building, created_at \
             FROM departments WHERE department_id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row
            .ok_or_else(|| PortError::not_found("Department", id))?
            .into())
    }

    async fn insert(&self, department: Department) -> Result<Department, PortError> {
        let row: DepartmentRow = sqlx::query_as(
            "INSERT INTO departments (department_id, name, building, created_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING department_id, name, building, created_at",
        )
        .bind(department.id.as_uuid())
        .bind(&department.name)
        .bind(&department.building)
        .bind(department.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row.into())
    }

    async fn update(&self, department: Department) -> Result<Department, PortError> {
        let row: Option<DepartmentRow> = sqlx::query_as(
            "UPDATE departments SET name = $2, building = $3 WHERE department_id = $1 \
             RETURNING department_id, name, building, created_at",
        )
        .bind(department.id.as_uuid())
        .bind(&department.name)
        .bind(&department.building)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(row
            .ok_or_else(|| PortError::not_found("Department", department.id))?
            .into())
    }

    async fn delete(&self, id: DepartmentId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM departments WHERE department_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Department", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Department>, PortError> {
        let rows: Vec<DepartmentRow> = sqlx::query_as(
            "SELECT department_id, name, building, created_at \
             FROM departments ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        Ok(rows.into_iter().map(Department::from).collect())
    }
}

impl DomainPort for PgDepartmentStore {}

/// Database row for a user account
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct UserRow {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = PortError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: UserRole = row.role.parse().map_err(|_| {
            PortError::from(DatabaseError::CorruptRow(format!(
                "unknown user role '{}' for user {}",
                row.role, row.user_id
            )))
        })?;

        Ok(User {
            id: UserId::from_uuid(row.user_id),
            email: row.email,
            username: row.username,
            first_name: row.first_name,
            last_name: row.last_name,
            role,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

/// Database row for a category
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub category_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId::from_uuid(row.category_id),
            name: row.name,
            created_at: row.created_at,
        }
    }
}

/// Database row for a department
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct DepartmentRow {
    pub department_id: Uuid,
    pub name: String,
    pub building: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department {
            id: DepartmentId::from_uuid(row.department_id),
            name: row.name,
            building: row.building,
            created_at: row.created_at,
        }
    }
}
