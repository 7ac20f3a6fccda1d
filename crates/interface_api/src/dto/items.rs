//! Item DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, DepartmentId, ItemId, UserId};
use domain_items::{Item, ItemStatus, NewItem};

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// LOST or FOUND as declared by the reporter
    pub status: ItemStatus,
    pub reporter_id: UserId,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    /// Defaults to the time the report is received
    pub reported_at: Option<DateTime<Utc>>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            title: req.title,
            description: req.description,
            location: req.location,
            image_url: req.image_url,
            status: req.status,
            reporter_id: req.reporter_id,
            category_id: req.category_id,
            department_id: req.department_id,
            reported_at: req.reported_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemStatusRequest {
    pub status: ItemStatus,
}

#[derive(Debug, Deserialize)]
pub struct ClaimItemRequest {
    pub user_id: UserId,
    pub verification_answer: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub status: ItemStatus,
    pub reporter_id: UserId,
    pub category_id: CategoryId,
    pub department_id: DepartmentId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            location: item.location,
            image_url: item.image_url,
            reported_at: item.reported_at,
            status: item.status,
            reporter_id: item.reporter_id,
            category_id: item.category_id,
            department_id: item.department_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
