//! Claim lifecycle service
//!
//! Coordinates the claim workflow with the item state machine: filing moves
//! the item FOUND -> CLAIMED, approval closes it out CLAIMED -> RETURNED,
//! and rejection reverts it CLAIMED -> FOUND so other users can claim.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use core_kernel::{ClaimId, ItemId, PortError, RegistryError, UserId};
use domain_directory::UserStore;
use domain_items::{ItemStatus, ItemStore};

use crate::claim::{Claim, ClaimStatus};
use crate::ports::{ClaimFilter, ClaimStore};

/// Orchestrates claim operations against the claim, item, and user stores
#[derive(Clone)]
pub struct ClaimLifecycle {
    claims: Arc<dyn ClaimStore>,
    items: Arc<dyn ItemStore>,
    users: Arc<dyn UserStore>,
}

impl ClaimLifecycle {
    pub fn new(
        claims: Arc<dyn ClaimStore>,
        items: Arc<dyn ItemStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            claims,
            items,
            users,
        }
    }

    /// Files a claim on a found item
    ///
    /// Validates the verification answer, resolves the item and claimant,
    /// and enforces the item-side preconditions (status FOUND, claimant is
    /// not the reporter). The claim insert and the FOUND -> CLAIMED
    /// transition are committed as one unit; if a concurrent filer wins the
    /// conditional update, this call fails with `InvalidState` and nothing
    /// is persisted.
    pub async fn file_claim(
        &self,
        item_id: ItemId,
        claimant_id: UserId,
        verification_answer: impl Into<String>,
    ) -> Result<Claim, RegistryError> {
        let claim = Claim::file(item_id, claimant_id, verification_answer)?;

        let item = self.items.get(item_id).await?;
        self.users.get(claimant_id).await?;
        item.claim_guard(claimant_id)?;

        match self.claims.file(claim).await {
            Ok(claim) => {
                info!(claim_id = %claim.id, item_id = %item_id, claimant_id = %claimant_id,
                    "claim filed, item marked CLAIMED");
                Ok(claim)
            }
            // The guard passed on a stale snapshot; another claim got there first.
            Err(PortError::Conflict { message }) => {
                warn!(item_id = %item_id, %message, "concurrent claim lost the conditional update");
                Err(RegistryError::invalid_state(
                    ItemStatus::Found,
                    ItemStatus::Claimed,
                ))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Approves a pending claim and hands the item back
    ///
    /// Sets APPROVED/verified and moves the item CLAIMED -> RETURNED in the
    /// same transaction. Re-approving an approved claim is an idempotent
    /// no-op; approving a rejected claim fails with `InvalidState`.
    pub async fn approve_claim(&self, claim_id: ClaimId) -> Result<Claim, RegistryError> {
        let mut claim = self.claims.get(claim_id).await?;
        if !claim.approve()? {
            return Ok(claim);
        }

        let claim = self
            .claims
            .settle(claim, Some(ItemStatus::Returned))
            .await?;
        info!(claim_id = %claim_id, item_id = %claim.item_id, "claim approved, item RETURNED");
        Ok(claim)
    }

    /// Rejects a pending claim and reopens the item
    ///
    /// Sets REJECTED and reverts the item CLAIMED -> FOUND atomically so
    /// other users can claim it again. Re-rejecting is an idempotent no-op;
    /// rejecting an approved claim fails with `InvalidState`.
    pub async fn reject_claim(&self, claim_id: ClaimId) -> Result<Claim, RegistryError> {
        let mut claim = self.claims.get(claim_id).await?;
        if !claim.reject()? {
            return Ok(claim);
        }

        let claim = self.claims.settle(claim, Some(ItemStatus::Found)).await?;
        info!(claim_id = %claim_id, item_id = %claim.item_id, "claim rejected, item FOUND again");
        Ok(claim)
    }

    /// Fetches a single claim
    pub async fn get_claim(&self, id: ClaimId) -> Result<Claim, RegistryError> {
        Ok(self.claims.get(id).await?)
    }

    /// Deletes a claim (administrative action)
    pub async fn delete_claim(&self, id: ClaimId) -> Result<(), RegistryError> {
        self.claims.get(id).await?;
        Ok(self.claims.delete(id).await?)
    }

    // --- queries; pure reads, no side effects ---

    pub async fn find(&self, filter: ClaimFilter) -> Result<Vec<Claim>, RegistryError> {
        Ok(self.claims.find(filter).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::default()).await
    }

    pub async fn claims_by_user(&self, user_id: UserId) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::by_claimant(user_id)).await
    }

    pub async fn claims_by_item(&self, item_id: ItemId) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::by_item(item_id)).await
    }

    pub async fn claims_by_status(
        &self,
        status: ClaimStatus,
    ) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::by_status(status)).await
    }

    /// Unverified claims: those awaiting review plus rejected ones
    pub async fn pending_claims(&self) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::pending()).await
    }

    /// Approved (verified) claims
    pub async fn verified_claims(&self) -> Result<Vec<Claim>, RegistryError> {
        self.find(ClaimFilter::verified()).await
    }

    pub async fn claims_between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<Claim>, RegistryError> {
        let filter = ClaimFilter {
            claimed_after: Some(after),
            claimed_before: Some(before),
            ..Default::default()
        };
        self.find(filter).await
    }

    /// Number of claims ever filed against an item
    pub async fn count_for_item(&self, item_id: ItemId) -> Result<u64, RegistryError> {
        Ok(self.claims_by_item(item_id).await?.len() as u64)
    }
}
