//! Item aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CategoryId, DepartmentId, ItemId, RegistryError, UserId};

/// Item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Reported lost by its owner
    Lost,
    /// Reported found, open for claims
    Found,
    /// A claim is pending administrative review
    Claimed,
    /// Handed back to a verified claimant
    Returned,
}

impl ItemStatus {
    /// Wire/storage representation, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "LOST",
            ItemStatus::Found => "FOUND",
            ItemStatus::Claimed => "CLAIMED",
            ItemStatus::Returned => "RETURNED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOST" => Ok(ItemStatus::Lost),
            "FOUND" => Ok(ItemStatus::Found),
            "CLAIMED" => Ok(ItemStatus::Claimed),
            "RETURNED" => Ok(ItemStatus::Returned),
            other => Err(RegistryError::validation(format!(
                "unknown item status '{other}'"
            ))),
        }
    }
}

/// A reported lost or found item
///
/// References to the reporter, category, and department are held by id; any
/// composite view a caller needs is assembled at the interface layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Short title shown in listings
    pub title: String,
    /// Free-text description
    pub description: Option<String>,
    /// Where the item was lost or found
    pub location: Option<String>,
    /// Reference to an uploaded image, if any
    pub image_url: Option<String>,
    /// When the report was filed
    pub reported_at: DateTime<Utc>,
    /// Current lifecycle status
    pub status: ItemStatus,
    /// The user who filed the report (immutable after creation)
    pub reporter_id: UserId,
    /// Classifying category
    pub category_id: CategoryId,
    /// Campus department the item belongs to
    pub department_id: DepartmentId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Attributes for reporting a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// Declared by the reporting user, no inference
    pub status: ItemStatus,
    pub reporter_id: UserId,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    /// Defaults to the current time when absent
    pub reported_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Creates a new item report
    ///
    /// The title must be non-empty; `reported_at` defaults to now.
    pub fn report(attributes: NewItem) -> Result<Self, RegistryError> {
        if attributes.title.trim().is_empty() {
            return Err(RegistryError::validation("item title is required"));
        }

        let now = Utc::now();
        Ok(Self {
            id: ItemId::new_v7(),
            title: attributes.title,
            description: attributes.description,
            location: attributes.location,
            image_url: attributes.image_url,
            reported_at: attributes.reported_at.unwrap_or(now),
            status: attributes.status,
            reporter_id: attributes.reporter_id,
            category_id: attributes.category_id,
            department_id: attributes.department_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Checks the preconditions for filing a claim against this item
    ///
    /// The item must currently be FOUND, and the claimant must not be the
    /// reporter. Both checks are re-validated by the store's conditional
    /// update when the claim is committed.
    pub fn claim_guard(&self, claimant_id: UserId) -> Result<(), RegistryError> {
        if self.status != ItemStatus::Found {
            return Err(RegistryError::invalid_state(ItemStatus::Found, self.status));
        }
        if self.reporter_id == claimant_id {
            return Err(RegistryError::SelfClaim);
        }
        Ok(())
    }

    /// Sets the status directly (administrative edit)
    ///
    /// Unrestricted across the four enumerated values; the claim workflow
    /// goes through `claim_guard` and the claim lifecycle instead.
    pub fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// True when the item is open for claims
    pub fn is_claimable(&self) -> bool {
        self.status == ItemStatus::Found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(status: ItemStatus) -> NewItem {
        NewItem {
            title: "Blue backpack".to_string(),
            description: Some("Jansport, water bottle inside".to_string()),
            location: Some("Library, 2nd floor".to_string()),
            image_url: None,
            status,
            reporter_id: UserId::new(),
            category_id: CategoryId::new(),
            department_id: DepartmentId::new(),
            reported_at: None,
        }
    }

    #[test]
    fn test_report_defaults_date() {
        let item = Item::report(new_item(ItemStatus::Found)).unwrap();
        assert_eq!(item.status, ItemStatus::Found);
        assert!(item.reported_at <= Utc::now());
    }

    #[test]
    fn test_report_rejects_blank_title() {
        let mut attrs = new_item(ItemStatus::Lost);
        attrs.title = "   ".to_string();
        let err = Item::report(attrs).unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[test]
    fn test_claim_guard_requires_found() {
        let item = Item::report(new_item(ItemStatus::Lost)).unwrap();
        let err = item.claim_guard(UserId::new()).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidState { .. }));
    }

    #[test]
    fn test_claim_guard_rejects_reporter() {
        let item = Item::report(new_item(ItemStatus::Found)).unwrap();
        let err = item.claim_guard(item.reporter_id).unwrap_err();
        assert!(matches!(err, RegistryError::SelfClaim));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ItemStatus::Lost,
            ItemStatus::Found,
            ItemStatus::Claimed,
            ItemStatus::Returned,
        ] {
            let parsed: ItemStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("MISPLACED".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_status_serde_upper_case() {
        let json = serde_json::to_string(&ItemStatus::Returned).unwrap();
        assert_eq!(json, "\"RETURNED\"");
    }
}
