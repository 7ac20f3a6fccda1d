//! In-memory store adapter
//!
//! Implements every domain store port over a single mutex-guarded state so
//! that the multi-row operations (`file`, `settle`, cascading delete) are
//! atomic, mirroring the transactional behavior of the PostgreSQL adapters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use core_kernel::{
    CategoryId, ClaimId, DepartmentId, DomainPort, ItemId, PortError, UserId,
};
use domain_claims::{Claim, ClaimFilter, ClaimStatus, ClaimStore};
use domain_directory::{
    Category, CategoryStore, Department, DepartmentStore, User, UserStore,
};
use domain_items::{Item, ItemFilter, ItemStatus, ItemStore};

#[derive(Default)]
struct State {
    items: HashMap<ItemId, Item>,
    claims: HashMap<ClaimId, Claim>,
    users: HashMap<UserId, User>,
    categories: HashMap<CategoryId, Category>,
    departments: HashMap<DepartmentId, Department>,
}

/// Mutex-guarded in-memory backend for all five store ports
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned mutex means a test already panicked; propagate.
        self.state.lock().expect("in-memory store mutex poisoned")
    }

    /// Reads an item's current status directly, bypassing the ports
    pub fn item_status(&self, id: ItemId) -> Option<ItemStatus> {
        self.lock().items.get(&id).map(|item| item.status)
    }

    /// Number of stored claims, for cascade assertions
    pub fn claim_count(&self) -> usize {
        self.lock().claims.len()
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl ItemStore for InMemoryStore {
    async fn get(&self, id: ItemId) -> Result<Item, PortError> {
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Item", id))
    }

    async fn insert(&self, item: Item) -> Result<Item, PortError> {
        self.lock().items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, PortError> {
        let mut state = self.lock();
        if !state.items.contains_key(&item.id) {
            return Err(PortError::not_found("Item", item.id));
        }
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: ItemId) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.items.remove(&id).is_none() {
            return Err(PortError::not_found("Item", id));
        }
        // Cascade, like the FK in the schema
        state.claims.retain(|_, claim| claim.item_id != id);
        Ok(())
    }

    async fn find(&self, filter: ItemFilter) -> Result<Vec<Item>, PortError> {
        let state = self.lock();
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(items)
    }
}

#[async_trait]
impl ClaimStore for InMemoryStore {
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.lock()
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn file(&self, claim: Claim) -> Result<Claim, PortError> {
        let mut state = self.lock();

        if state
            .claims
            .values()
            .any(|c| c.item_id == claim.item_id && c.status == ClaimStatus::Pending)
        {
            return Err(PortError::conflict("a pending claim already exists"));
        }

        let item = state
            .items
            .get_mut(&claim.item_id)
            .ok_or_else(|| PortError::not_found("Item", claim.item_id))?;
        if item.status != ItemStatus::Found {
            // Conditional update matched zero rows; nothing is committed.
            return Err(PortError::conflict(format!(
                "item {} is {}, not FOUND",
                claim.item_id, item.status
            )));
        }
        item.set_status(ItemStatus::Claimed);

        state.claims.insert(claim.id, claim.clone());
        Ok(claim)
    }

    async fn settle(
        &self,
        claim: Claim,
        item_transition: Option<ItemStatus>,
    ) -> Result<Claim, PortError> {
        let mut state = self.lock();
        if !state.claims.contains_key(&claim.id) {
            return Err(PortError::not_found("Claim", claim.id));
        }

        if let Some(target) = item_transition {
            if let Some(item) = state.items.get_mut(&claim.item_id) {
                // Conditional: only a CLAIMED item follows the claim decision
                if item.status == ItemStatus::Claimed {
                    item.set_status(target);
                }
            }
        }

        state.claims.insert(claim.id, claim.clone());
        Ok(claim)
    }

    async fn delete(&self, id: ClaimId) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.claims.remove(&id).is_none() {
            return Err(PortError::not_found("Claim", id));
        }
        Ok(())
    }

    async fn find(&self, filter: ClaimFilter) -> Result<Vec<Claim>, PortError> {
        let state = self.lock();
        let mut claims: Vec<Claim> = state
            .claims
            .values()
            .filter(|claim| filter.matches(claim))
            .cloned()
            .collect();
        claims.sort_by(|a, b| b.claimed_at.cmp(&a.claimed_at));
        Ok(claims)
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn get(&self, id: UserId) -> Result<User, PortError> {
        self.lock()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("User", id))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, PortError> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|user| user.email == login || user.username == login)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User, PortError> {
        let mut state = self.lock();
        if state
            .users
            .values()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(PortError::conflict("duplicate email or username"));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, PortError> {
        let mut state = self.lock();
        if !state.users.contains_key(&user.id) {
            return Err(PortError::not_found("User", user.id));
        }
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.users.remove(&id).is_none() {
            return Err(PortError::not_found("User", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, PortError> {
        Ok(self.lock().users.values().cloned().collect())
    }
}

#[async_trait]
impl CategoryStore for InMemoryStore {
    async fn get(&self, id: CategoryId) -> Result<Category, PortError> {
        self.lock()
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Category", id))
    }

    async fn insert(&self, category: Category) -> Result<Category, PortError> {
        let mut state = self.lock();
        if state.categories.values().any(|c| c.name == category.name) {
            return Err(PortError::conflict("duplicate category name"));
        }
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, PortError> {
        let mut state = self.lock();
        if !state.categories.contains_key(&category.id) {
            return Err(PortError::not_found("Category", category.id));
        }
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.items.values().any(|item| item.category_id == id) {
            return Err(PortError::conflict("category is referenced by items"));
        }
        if state.categories.remove(&id).is_none() {
            return Err(PortError::not_found("Category", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Category>, PortError> {
        Ok(self.lock().categories.values().cloned().collect())
    }
}

#[async_trait]
impl DepartmentStore for InMemoryStore {
    async fn get(&self, id: DepartmentId) -> Result<Department, PortError> {
        self.lock()
            .departments
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Department", id))
    }

    async fn insert(&self, department: Department) -> Result<Department, PortError> {
        let mut state = self.lock();
        if state.departments.values().any(|d| d.name == department.name) {
            return Err(PortError::conflict("duplicate department name"));
        }
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(&self, department: Department) -> Result<Department, PortError> {
        let mut state = self.lock();
        if !state.departments.contains_key(&department.id) {
            return Err(PortError::not_found("Department", department.id));
        }
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete(&self, id: DepartmentId) -> Result<(), PortError> {
        let mut state = self.lock();
        if state.items.values().any(|item| item.department_id == id) {
            return Err(PortError::conflict("department is referenced by items"));
        }
        if state.departments.remove(&id).is_none() {
            return Err(PortError::not_found("Department", id));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Department>, PortError> {
        Ok(self.lock().departments.values().cloned().collect())
    }
}
