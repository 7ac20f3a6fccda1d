//! Item repository implementation
//!
//! This module provides database access for lost and found item reports,
//! backing the `ItemStore` port with PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CategoryId, DepartmentId, DomainPort, ItemId, PortError, UserId};
use domain_items::{Item, ItemFilter, ItemStatus, ItemStore};

use crate::error::DatabaseError;

const ITEM_COLUMNS: &str = "item_id, title, description, location, image_url, \
     reported_at, status, reporter_id, category_id, department_id, \
     created_at, updated_at";

/// PostgreSQL adapter for the item store port
#[derive(Debug, Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Creates a new item store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn get(&self, id: ItemId) -> Result<Item, PortError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE item_id = $1");
        let row: Option<ItemRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.ok_or_else(|| PortError::not_found("Item", id))?.try_into()
    }

    async fn insert(&self, item: Item) -> Result<Item, PortError> {
        let sql = format!(
            "INSERT INTO items ({ITEM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {ITEM_COLUMNS}"
        );
        let row: ItemRow = sqlx::query_as(&sql)
            .bind(item.id.as_uuid())
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.location)
            .bind(&item.image_url)
            .bind(item.reported_at)
            .bind(item.status.as_str())
            .bind(item.reporter_id.as_uuid())
            .bind(item.category_id.as_uuid())
            .bind(item.department_id.as_uuid())
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.try_into()
    }

    async fn update(&self, item: Item) -> Result<Item, PortError> {
        // reporter_id is deliberately absent from the SET list
        let sql = format!(
            "UPDATE items SET \
                 title = $2, description = $3, location = $4, image_url = $5, \
                 reported_at = $6, status = $7, category_id = $8, \
                 department_id = $9, updated_at = $10 \
             WHERE item_id = $1 \
             RETURNING {ITEM_COLUMNS}"
        );
        let row: Option<ItemRow> = sqlx::query_as(&sql)
            .bind(item.id.as_uuid())
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.location)
            .bind(&item.image_url)
            .bind(item.reported_at)
            .bind(item.status.as_str())
            .bind(item.category_id.as_uuid())
            .bind(item.department_id.as_uuid())
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.ok_or_else(|| PortError::not_found("Item", item.id))?
            .try_into()
    }

    async fn delete(&self, id: ItemId) -> Result<(), PortError> {
        // claims are removed by the ON DELETE CASCADE on claims.item_id
        let result = sqlx::query("DELETE FROM items WHERE item_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Item", id));
        }
        Ok(())
    }

    async fn find(&self, filter: ItemFilter) -> Result<Vec<Item>, PortError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE ($1::text IS NULL OR status = $1) \
               AND ($2::uuid IS NULL OR reporter_id = $2) \
               AND ($3::uuid IS NULL OR category_id = $3) \
               AND ($4::uuid IS NULL OR department_id = $4) \
               AND ($5::text IS NULL OR title ILIKE '%' || $5 || '%') \
               AND ($6::text IS NULL OR location ILIKE '%' || $6 || '%') \
               AND ($7::text IS NULL OR description ILIKE '%' || $7 || '%') \
               AND ($8::timestamptz IS NULL OR reported_at >= $8) \
               AND ($9::timestamptz IS NULL OR reported_at <= $9) \
             ORDER BY reported_at DESC"
        );
        let rows: Vec<ItemRow> = sqlx::query_as(&sql)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.reporter_id.map(Uuid::from))
            .bind(filter.category_id.map(Uuid::from))
            .bind(filter.department_id.map(Uuid::from))
            .bind(filter.title_contains)
            .bind(filter.location_contains)
            .bind(filter.description_contains)
            .bind(filter.reported_after)
            .bind(filter.reported_before)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        rows.into_iter().map(Item::try_from).collect()
    }
}

impl DomainPort for PgItemStore {}

/// Database row for an item report
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct ItemRow {
    pub item_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub status: String,
    pub reporter_id: Uuid,
    pub category_id: Uuid,
    pub department_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = PortError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let status: ItemStatus = row.status.parse().map_err(|_| {
            PortError::from(DatabaseError::CorruptRow(format!(
                "unknown item status '{}' for item {}",
                row.status, row.item_id
            )))
        })?;

        Ok(Item {
            id: ItemId::from_uuid(row.item_id),
            title: row.title,
            description: row.description,
            location: row.location,
            image_url: row.image_url,
            reported_at: row.reported_at,
            status,
            reporter_id: UserId::from_uuid(row.reporter_id),
            category_id: CategoryId::from_uuid(row.category_id),
            department_id: DepartmentId::from_uuid(row.department_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
