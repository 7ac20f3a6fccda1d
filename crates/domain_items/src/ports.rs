//! Item domain ports
//!
//! `ItemStore` defines all operations the item lifecycle needs from its data
//! source. The PostgreSQL adapter lives in `infra_db`; tests use the
//! in-memory adapter from `test_utils`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{CategoryId, DepartmentId, DomainPort, ItemId, PortError, UserId};

use crate::item::{Item, ItemStatus};

/// Query parameters for finding items
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Filter by lifecycle status
    pub status: Option<ItemStatus>,
    /// Filter by reporting user
    pub reporter_id: Option<UserId>,
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Filter by department
    pub department_id: Option<DepartmentId>,
    /// Case-insensitive substring match on title
    pub title_contains: Option<String>,
    /// Case-insensitive substring match on location
    pub location_contains: Option<String>,
    /// Case-insensitive substring match on description
    pub description_contains: Option<String>,
    /// Only items reported at or after this time
    pub reported_after: Option<DateTime<Utc>>,
    /// Only items reported at or before this time
    pub reported_before: Option<DateTime<Utc>>,
}

impl ItemFilter {
    /// Creates a filter matching a single status
    pub fn by_status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Creates a filter matching one reporter's items
    pub fn by_reporter(reporter_id: UserId) -> Self {
        Self {
            reporter_id: Some(reporter_id),
            ..Default::default()
        }
    }

    /// Creates a filter matching one category
    pub fn by_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Default::default()
        }
    }

    /// Creates a filter matching one department
    pub fn by_department(department_id: DepartmentId) -> Self {
        Self {
            department_id: Some(department_id),
            ..Default::default()
        }
    }

    /// Creates a title/location search filter; either term may be absent
    pub fn search(title: Option<String>, location: Option<String>) -> Self {
        Self {
            title_contains: title,
            location_contains: location,
            ..Default::default()
        }
    }

    /// Adds a reported-at window to the filter
    pub fn reported_between(mut self, after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        self.reported_after = Some(after);
        self.reported_before = Some(before);
        self
    }

    /// Checks a loaded item against the filter (used by in-memory adapters)
    pub fn matches(&self, item: &Item) -> bool {
        fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
            haystack
                .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false)
        }

        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(reporter) = self.reporter_id {
            if item.reporter_id != reporter {
                return false;
            }
        }
        if let Some(category) = self.category_id {
            if item.category_id != category {
                return false;
            }
        }
        if let Some(department) = self.department_id {
            if item.department_id != department {
                return false;
            }
        }
        if let Some(ref term) = self.title_contains {
            if !contains_ci(Some(&item.title), term) {
                return false;
            }
        }
        if let Some(ref term) = self.location_contains {
            if !contains_ci(item.location.as_deref(), term) {
                return false;
            }
        }
        if let Some(ref term) = self.description_contains {
            if !contains_ci(item.description.as_deref(), term) {
                return false;
            }
        }
        if let Some(after) = self.reported_after {
            if item.reported_at < after {
                return false;
            }
        }
        if let Some(before) = self.reported_before {
            if item.reported_at > before {
                return false;
            }
        }
        true
    }
}

/// Store operations for items
#[async_trait]
pub trait ItemStore: DomainPort {
    /// Retrieves an item by id
    async fn get(&self, id: ItemId) -> Result<Item, PortError>;

    /// Persists a newly reported item
    async fn insert(&self, item: Item) -> Result<Item, PortError>;

    /// Persists updated item fields (reporter reference is never changed)
    async fn update(&self, item: Item) -> Result<Item, PortError>;

    /// Deletes an item together with its claims
    async fn delete(&self, id: ItemId) -> Result<(), PortError>;

    /// Lists items matching the filter, newest report first
    async fn find(&self, filter: ItemFilter) -> Result<Vec<Item>, PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewItem;

    fn found_item() -> Item {
        Item::report(NewItem {
            title: "Silver water bottle".to_string(),
            description: Some("Dented near the cap".to_string()),
            location: Some("Gym entrance".to_string()),
            image_url: None,
            status: ItemStatus::Found,
            reporter_id: UserId::new(),
            category_id: CategoryId::new(),
            department_id: DepartmentId::new(),
            reported_at: None,
        })
        .unwrap()
    }

    #[test]
    fn test_filter_by_status() {
        let item = found_item();
        assert!(ItemFilter::by_status(ItemStatus::Found).matches(&item));
        assert!(!ItemFilter::by_status(ItemStatus::Lost).matches(&item));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let item = found_item();
        let filter = ItemFilter::search(Some("silver".to_string()), None);
        assert!(filter.matches(&item));

        let filter = ItemFilter::search(None, Some("GYM".to_string()));
        assert!(filter.matches(&item));

        let filter = ItemFilter::search(Some("umbrella".to_string()), None);
        assert!(!filter.matches(&item));
    }

    #[test]
    fn test_filter_reported_window() {
        let item = found_item();
        let filter = ItemFilter::default().reported_between(
            item.reported_at - chrono::Duration::hours(1),
            item.reported_at + chrono::Duration::hours(1),
        );
        assert!(filter.matches(&item));

        let filter = ItemFilter::default().reported_between(
            item.reported_at + chrono::Duration::hours(1),
            item.reported_at + chrono::Duration::hours(2),
        );
        assert!(!filter.matches(&item));
    }
}
