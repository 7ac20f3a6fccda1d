//! Directory service
//!
//! Thin orchestration over the three directory stores: account
//! registration/login plus category and department CRUD.

use std::sync::Arc;

use tracing::info;

use core_kernel::{CategoryId, DepartmentId, RegistryError, UserId};

use crate::category::Category;
use crate::department::Department;
use crate::ports::{CategoryStore, DepartmentStore, UserStore};
use crate::user::{NewUser, User};

#[derive(Clone)]
pub struct Directory {
    users: Arc<dyn UserStore>,
    categories: Arc<dyn CategoryStore>,
    departments: Arc<dyn DepartmentStore>,
}

impl Directory {
    pub fn new(
        users: Arc<dyn UserStore>,
        categories: Arc<dyn CategoryStore>,
        departments: Arc<dyn DepartmentStore>,
    ) -> Self {
        Self {
            users,
            categories,
            departments,
        }
    }

    // --- users ---

    /// Registers a new account, enforcing unique email/username
    pub async fn register_user(&self, attributes: NewUser) -> Result<User, RegistryError> {
        if self.users.find_by_login(&attributes.email).await?.is_some() {
            return Err(RegistryError::Conflict(format!(
                "email '{}' is already registered",
                attributes.email
            )));
        }
        if self
            .users
            .find_by_login(&attributes.username)
            .await?
            .is_some()
        {
            return Err(RegistryError::Conflict(format!(
                "username '{}' is taken",
                attributes.username
            )));
        }

        let user = User::register(attributes)?;
        let user = self.users.insert(user).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Validates login credentials; failures are reported uniformly so the
    /// response does not reveal whether the account exists
    pub async fn login(&self, login: &str, password: &str) -> Result<User, RegistryError> {
        let user = self.users.find_by_login(login).await?;
        match user {
            Some(user) if user.verify_password(password) => Ok(user),
            _ => Err(RegistryError::validation("invalid credentials")),
        }
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, RegistryError> {
        Ok(self.users.get(id).await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RegistryError> {
        Ok(self.users.list().await?)
    }

    /// Updates profile fields; credentials and role are left as stored
    pub async fn update_user_profile(
        &self,
        id: UserId,
        first_name: String,
        last_name: String,
    ) -> Result<User, RegistryError> {
        let mut user = self.users.get(id).await?;
        user.first_name = first_name;
        user.last_name = last_name;
        Ok(self.users.update(user).await?)
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), RegistryError> {
        self.users.get(id).await?;
        Ok(self.users.delete(id).await?)
    }

    // --- categories ---

    pub async fn create_category(&self, name: String) -> Result<Category, RegistryError> {
        let category = Category::new(name)?;
        Ok(self.categories.insert(category).await?)
    }

    pub async fn get_category(&self, id: CategoryId) -> Result<Category, RegistryError> {
        Ok(self.categories.get(id).await?)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, RegistryError> {
        Ok(self.categories.list().await?)
    }

    pub async fn rename_category(
        &self,
        id: CategoryId,
        name: String,
    ) -> Result<Category, RegistryError> {
        let mut category = self.categories.get(id).await?;
        category.rename(name)?;
        Ok(self.categories.update(category).await?)
    }

    pub async fn delete_category(&self, id: CategoryId) -> Result<(), RegistryError> {
        self.categories.get(id).await?;
        Ok(self.categories.delete(id).await?)
    }

    // --- departments ---

    pub async fn create_department(
        &self,
        name: String,
        building: Option<String>,
    ) -> Result<Department, RegistryError> {
        let department = Department::new(name, building)?;
        Ok(self.departments.insert(department).await?)
    }

    pub async fn get_department(&self, id: DepartmentId) -> Result<Department, RegistryError> {
        Ok(self.departments.get(id).await?)
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, RegistryError> {
        Ok(self.departments.list().await?)
    }

    pub async fn update_department(
        &self,
        id: DepartmentId,
        name: String,
        building: Option<String>,
    ) -> Result<Department, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::validation("department name is required"));
        }
        let mut department = self.departments.get(id).await?;
        department.name = name;
        department.building = building;
        Ok(self.departments.update(department).await?)
    }

    pub async fn delete_department(&self, id: DepartmentId) -> Result<(), RegistryError> {
        self.departments.get(id).await?;
        Ok(self.departments.delete(id).await?)
    }
}
