//! Claim domain ports
//!
//! The store is responsible for the transactional coupling between a claim
//! and its item: `file` inserts the claim and performs the conditional
//! FOUND -> CLAIMED transition as one unit, and `settle` persists an
//! approve/reject decision together with the item's follow-up transition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{ClaimId, DomainPort, ItemId, PortError, UserId};
use domain_items::ItemStatus;

use crate::claim::{Claim, ClaimStatus};

/// Query parameters for finding claims
#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    /// Filter by claimed item
    pub item_id: Option<ItemId>,
    /// Filter by claiming user
    pub claimant_id: Option<UserId>,
    /// Filter by workflow status
    pub status: Option<ClaimStatus>,
    /// Filter by the verified flag
    pub verified: Option<bool>,
    /// Only claims filed at or after this time
    pub claimed_after: Option<DateTime<Utc>>,
    /// Only claims filed at or before this time
    pub claimed_before: Option<DateTime<Utc>>,
}

impl ClaimFilter {
    pub fn by_item(item_id: ItemId) -> Self {
        Self {
            item_id: Some(item_id),
            ..Default::default()
        }
    }

    pub fn by_claimant(claimant_id: UserId) -> Self {
        Self {
            claimant_id: Some(claimant_id),
            ..Default::default()
        }
    }

    pub fn by_status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Unverified claims (verified = false); rejected claims stay in this
    /// view alongside those still awaiting review
    pub fn pending() -> Self {
        Self {
            verified: Some(false),
            ..Default::default()
        }
    }

    /// Approved claims (verified = true)
    pub fn verified() -> Self {
        Self {
            verified: Some(true),
            ..Default::default()
        }
    }

    /// Checks a loaded claim against the filter (used by in-memory adapters)
    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(item_id) = self.item_id {
            if claim.item_id != item_id {
                return false;
            }
        }
        if let Some(claimant_id) = self.claimant_id {
            if claim.claimant_id != claimant_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if claim.status != status {
                return false;
            }
        }
        if let Some(verified) = self.verified {
            if claim.verified != verified {
                return false;
            }
        }
        if let Some(after) = self.claimed_after {
            if claim.claimed_at < after {
                return false;
            }
        }
        if let Some(before) = self.claimed_before {
            if claim.claimed_at > before {
                return false;
            }
        }
        true
    }
}

/// Store operations for claims
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Retrieves a claim by id
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Commits a new claim and the FOUND -> CLAIMED item transition atomically
    ///
    /// The item row is updated conditionally ("set CLAIMED where status is
    /// FOUND"); when that matches no row a concurrent filer already won and
    /// the whole unit rolls back with [`PortError::Conflict`].
    async fn file(&self, claim: Claim) -> Result<Claim, PortError>;

    /// Persists a settled claim and, when `item_transition` is given, moves
    /// the item from CLAIMED to that status in the same transaction
    async fn settle(
        &self,
        claim: Claim,
        item_transition: Option<ItemStatus>,
    ) -> Result<Claim, PortError>;

    /// Deletes a claim (administrative action)
    async fn delete(&self, id: ClaimId) -> Result<(), PortError>;

    /// Lists claims matching the filter, newest first
    async fn find(&self, filter: ClaimFilter) -> Result<Vec<Claim>, PortError>;
}
