//! Pre-wired registry fixture
//!
//! Bundles the in-memory store with fully constructed lifecycle services so
//! tests exercise the same wiring the server binary uses.

use std::sync::Arc;

use domain_claims::ClaimLifecycle;
use domain_directory::{Category, Department, Directory, User};
use domain_items::{Item, ItemLifecycle, ItemStatus};

use crate::builders::{ItemBuilder, UserBuilder};
use crate::memory::InMemoryStore;

/// All services wired over one shared [`InMemoryStore`]
#[derive(Clone)]
pub struct TestRegistry {
    pub store: InMemoryStore,
    pub items: ItemLifecycle,
    pub claims: ClaimLifecycle,
    pub directory: Directory,
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistry {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let shared = Arc::new(store.clone());
        Self {
            items: ItemLifecycle::new(shared.clone()),
            claims: ClaimLifecycle::new(shared.clone(), shared.clone(), shared.clone()),
            directory: Directory::new(shared.clone(), shared.clone(), shared),
            store,
        }
    }

    /// Registers a user with builder defaults
    pub async fn seed_user(&self) -> User {
        self.directory
            .register_user(UserBuilder::new().build())
            .await
            .expect("seed user")
    }

    /// Creates a category with the given name
    pub async fn seed_category(&self, name: &str) -> Category {
        self.directory
            .create_category(name.to_string())
            .await
            .expect("seed category")
    }

    /// Creates a department with the given name
    pub async fn seed_department(&self, name: &str) -> Department {
        self.directory
            .create_department(name.to_string(), None)
            .await
            .expect("seed department")
    }

    /// Reports an item with the given status, creating reporter and lookups
    pub async fn seed_item(&self, status: ItemStatus) -> Item {
        let reporter = self.seed_user().await;
        let category = self.seed_category(&format!("cat-{}", category_tag())).await;
        let department = self
            .seed_department(&format!("dep-{}", category_tag()))
            .await;

        self.items
            .create_item(
                ItemBuilder::new()
                    .with_status(status)
                    .with_reporter(reporter.id)
                    .with_category(category.id)
                    .with_department(department.id)
                    .build(),
            )
            .await
            .expect("seed item")
    }
}

fn category_tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
