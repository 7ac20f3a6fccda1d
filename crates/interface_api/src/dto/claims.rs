//! Claim DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ItemId, UserId};
use domain_claims::{Claim, ClaimStatus};

#[derive(Debug, Deserialize)]
pub struct FileClaimRequest {
    pub item_id: ItemId,
    pub user_id: UserId,
    pub verification_answer: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub item_id: ItemId,
    pub claimant_id: UserId,
    pub verification_answer: String,
    pub claimed_at: DateTime<Utc>,
    pub status: ClaimStatus,
    pub verified: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            item_id: claim.item_id,
            claimant_id: claim.claimant_id,
            verification_answer: claim.verification_answer,
            claimed_at: claim.claimed_at,
            status: claim.status,
            verified: claim.verified,
            updated_at: claim.updated_at,
        }
    }
}
