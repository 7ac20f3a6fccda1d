//! Item lifecycle service
//!
//! Application service owning item creation, status edits, and deletion.
//! Claim-driven transitions (FOUND -> CLAIMED and the approve/reject paths)
//! are coordinated by the claim lifecycle and committed atomically by the
//! claim store.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use core_kernel::{ItemId, RegistryError};

use crate::item::{Item, ItemStatus, NewItem};
use crate::ports::{ItemFilter, ItemStore};

/// Orchestrates item operations against an [`ItemStore`]
#[derive(Clone)]
pub struct ItemLifecycle {
    store: Arc<dyn ItemStore>,
}

impl ItemLifecycle {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Reports a new item with the status declared by the reporter
    pub async fn create_item(&self, attributes: NewItem) -> Result<Item, RegistryError> {
        let item = Item::report(attributes)?;
        let item = self.store.insert(item).await?;
        info!(item_id = %item.id, status = %item.status, "item reported");
        Ok(item)
    }

    /// Reports an item as lost, stamping the report time
    pub async fn report_lost(&self, mut attributes: NewItem) -> Result<Item, RegistryError> {
        attributes.status = ItemStatus::Lost;
        attributes.reported_at = Some(Utc::now());
        self.create_item(attributes).await
    }

    /// Reports an item as found, stamping the report time
    pub async fn report_found(&self, mut attributes: NewItem) -> Result<Item, RegistryError> {
        attributes.status = ItemStatus::Found;
        attributes.reported_at = Some(Utc::now());
        self.create_item(attributes).await
    }

    /// Fetches a single item
    pub async fn get_item(&self, id: ItemId) -> Result<Item, RegistryError> {
        Ok(self.store.get(id).await?)
    }

    /// Directly sets an item's status (administrative edit)
    pub async fn set_status(
        &self,
        id: ItemId,
        status: ItemStatus,
    ) -> Result<Item, RegistryError> {
        let mut item = self.store.get(id).await?;
        let previous = item.status;
        item.set_status(status);
        let item = self.store.update(item).await?;
        info!(item_id = %id, from = %previous, to = %status, "item status updated");
        Ok(item)
    }

    /// Updates an item's descriptive fields; the reporter reference is immutable
    pub async fn update_item(
        &self,
        id: ItemId,
        attributes: NewItem,
    ) -> Result<Item, RegistryError> {
        if attributes.title.trim().is_empty() {
            return Err(RegistryError::validation("item title is required"));
        }
        let mut item = self.store.get(id).await?;
        item.title = attributes.title;
        item.description = attributes.description;
        item.location = attributes.location;
        item.image_url = attributes.image_url;
        item.status = attributes.status;
        item.category_id = attributes.category_id;
        item.department_id = attributes.department_id;
        if let Some(reported_at) = attributes.reported_at {
            item.reported_at = reported_at;
        }
        item.updated_at = Utc::now();
        Ok(self.store.update(item).await?)
    }

    /// Deletes an item; associated claims are removed with it
    pub async fn delete_item(&self, id: ItemId) -> Result<(), RegistryError> {
        // Surface NotFound before the cascade runs
        self.store.get(id).await?;
        self.store.delete(id).await?;
        info!(item_id = %id, "item deleted");
        Ok(())
    }

    /// Lists items matching the filter
    pub async fn find(&self, filter: ItemFilter) -> Result<Vec<Item>, RegistryError> {
        Ok(self.store.find(filter).await?)
    }

    /// Lists all items
    pub async fn list_all(&self) -> Result<Vec<Item>, RegistryError> {
        self.find(ItemFilter::default()).await
    }

    /// Lists items reported within the last 30 days
    pub async fn recent(&self) -> Result<Vec<Item>, RegistryError> {
        let filter = ItemFilter {
            reported_after: Some(Utc::now() - Duration::days(30)),
            ..Default::default()
        };
        self.find(filter).await
    }

    /// Lists items reported between two instants
    pub async fn reported_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<Item>, RegistryError> {
        self.find(ItemFilter::default().reported_between(after, before))
            .await
    }
}
