//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use core_kernel::{CategoryId, DepartmentId, UserId};
use domain_directory::{NewUser, UserRole};
use domain_items::{ItemStatus, NewItem};

/// Builder for item report attributes
pub struct ItemBuilder {
    title: String,
    description: Option<String>,
    location: Option<String>,
    image_url: Option<String>,
    status: ItemStatus,
    reporter_id: UserId,
    category_id: CategoryId,
    department_id: DepartmentId,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            title: "Blue backpack".to_string(),
            description: Some("Jansport with a laptop sleeve".to_string()),
            location: Some("Library, 2nd floor".to_string()),
            image_url: None,
            status: ItemStatus::Found,
            reporter_id: UserId::new(),
            category_id: CategoryId::new(),
            department_id: DepartmentId::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_reporter(mut self, reporter_id: UserId) -> Self {
        self.reporter_id = reporter_id;
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_department(mut self, department_id: DepartmentId) -> Self {
        self.department_id = department_id;
        self
    }

    pub fn build(self) -> NewItem {
        NewItem {
            title: self.title,
            description: self.description,
            location: self.location,
            image_url: self.image_url,
            status: self.status,
            reporter_id: self.reporter_id,
            category_id: self.category_id,
            department_id: self.department_id,
            reported_at: None,
        }
    }
}

/// Builder for registration attributes
pub struct UserBuilder {
    email: String,
    username: String,
    first_name: String,
    last_name: String,
    role: UserRole,
    password: String,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    pub fn new() -> Self {
        let tag = uuid::Uuid::new_v4().simple().to_string();
        Self {
            email: format!("user-{tag}@university.edu"),
            username: format!("user-{tag}"),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: UserRole::User,
            password: "hunter2hunter2".to_string(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn build(self) -> NewUser {
        NewUser {
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            password: self.password,
        }
    }
}
