//! Claim repository implementation
//!
//! This module provides database access for ownership claims. The two
//! write paths that couple a claim to its item - filing and settling -
//! run inside a single transaction so the claim row and the item status
//! can never disagree.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use core_kernel::{ClaimId, DomainPort, ItemId, PortError, UserId};
use domain_claims::{Claim, ClaimFilter, ClaimStatus, ClaimStore};
use domain_items::ItemStatus;

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str = "claim_id, item_id, claimant_id, verification_answer, \
     claimed_at, status, verified, updated_at";

/// PostgreSQL adapter for the claim store port
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    /// Creates a new claim store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1");
        let row: Option<ClaimRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.ok_or_else(|| PortError::not_found("Claim", id))?
            .try_into()
    }

    async fn file(&self, claim: Claim) -> Result<Claim, PortError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        // Conditional transition: only a FOUND item can be claimed. A zero
        // row count means a concurrent filer won the race (or the item's
        // status changed), and the whole unit rolls back.
        let moved = sqlx::query(
            "UPDATE items SET status = $2, updated_at = $3 \
             WHERE item_id = $1 AND status = $4",
        )
        .bind(claim.item_id.as_uuid())
        .bind(ItemStatus::Claimed.as_str())
        .bind(Utc::now())
        .bind(ItemStatus::Found.as_str())
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::from)
        .map_err(PortError::from)?;

        if moved.rows_affected() == 0 {
            let status: Option<(String,)> =
                sqlx::query_as("SELECT status FROM items WHERE item_id = $1")
                    .bind(claim.item_id.as_uuid())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(DatabaseError::from)
                    .map_err(PortError::from)?;

            // tx drops here, rolling the transaction back
            return Err(match status {
                None => PortError::not_found("Item", claim.item_id),
                Some((current,)) => PortError::conflict(format!(
                    "item {} is {}, only FOUND items can be claimed",
                    claim.item_id, current
                )),
            });
        }

        let sql = format!(
            "INSERT INTO claims ({CLAIM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row: ClaimRow = sqlx::query_as(&sql)
            .bind(claim.id.as_uuid())
            .bind(claim.item_id.as_uuid())
            .bind(claim.claimant_id.as_uuid())
            .bind(&claim.verification_answer)
            .bind(claim.claimed_at)
            .bind(claim.status.as_str())
            .bind(claim.verified)
            .bind(claim.updated_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        tx.commit()
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.try_into()
    }

    async fn settle(
        &self,
        claim: Claim,
        item_transition: Option<ItemStatus>,
    ) -> Result<Claim, PortError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        let sql = format!(
            "UPDATE claims SET status = $2, verified = $3, updated_at = $4 \
             WHERE claim_id = $1 \
             RETURNING {CLAIM_COLUMNS}"
        );
        let row: Option<ClaimRow> = sqlx::query_as(&sql)
            .bind(claim.id.as_uuid())
            .bind(claim.status.as_str())
            .bind(claim.verified)
            .bind(claim.updated_at)
            .fetch_optional(&mut *tx)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        let Some(row) = row else {
            return Err(PortError::not_found("Claim", claim.id));
        };

        if let Some(target) = item_transition {
            // Conditional on CLAIMED so a settled item is never moved twice
            let moved = sqlx::query(
                "UPDATE items SET status = $2, updated_at = $3 \
                 WHERE item_id = $1 AND status = $4",
            )
            .bind(claim.item_id.as_uuid())
            .bind(target.as_str())
            .bind(Utc::now())
            .bind(ItemStatus::Claimed.as_str())
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

            if moved.rows_affected() == 0 {
                debug!(
                    item_id = %claim.item_id,
                    target = %target,
                    "settle found item already out of CLAIMED, leaving it as-is"
                );
            }
        }

        tx.commit()
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        row.try_into()
    }

    async fn delete(&self, id: ClaimId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM claims WHERE claim_id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Claim", id));
        }
        Ok(())
    }

    async fn find(&self, filter: ClaimFilter) -> Result<Vec<Claim>, PortError> {
        let sql = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims \
             WHERE ($1::uuid IS NULL OR item_id = $1) \
               AND ($2::uuid IS NULL OR claimant_id = $2) \
               AND ($3::text IS NULL OR status = $3) \
               AND ($4::boolean IS NULL OR verified = $4) \
               AND ($5::timestamptz IS NULL OR claimed_at >= $5) \
               AND ($6::timestamptz IS NULL OR claimed_at <= $6) \
             ORDER BY claimed_at DESC"
        );
        let rows: Vec<ClaimRow> = sqlx::query_as(&sql)
            .bind(filter.item_id.map(Uuid::from))
            .bind(filter.claimant_id.map(Uuid::from))
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.verified)
            .bind(filter.claimed_after)
            .bind(filter.claimed_before)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)
            .map_err(PortError::from)?;

        rows.into_iter().map(Claim::try_from).collect()
    }
}

impl DomainPort for PgClaimStore {}

/// Database row for an ownership claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub(crate) struct ClaimRow {
    pub claim_id: Uuid,
    pub item_id: Uuid,
    pub claimant_id: Uuid,
    pub verification_answer: String,
    pub claimed_at: DateTime<Utc>,
    pub status: String,
    pub verified: bool,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = PortError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        let status: ClaimStatus = row.status.parse().map_err(|_| {
            PortError::from(DatabaseError::CorruptRow(format!(
                "unknown claim status '{}' for claim {}",
                row.status, row.claim_id
            )))
        })?;

        Ok(Claim {
            id: ClaimId::from_uuid(row.claim_id),
            item_id: ItemId::from_uuid(row.item_id),
            claimant_id: UserId::from_uuid(row.claimant_id),
            verification_answer: row.verification_answer,
            claimed_at: row.claimed_at,
            status,
            verified: row.verified,
            updated_at: row.updated_at,
        })
    }
}
