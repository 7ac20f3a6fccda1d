//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, ItemId, RegistryError, UserId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Awaiting administrative review
    Pending,
    /// Verified and approved; terminal
    Approved,
    /// Rejected; terminal
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "PENDING",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
        }
    }

    /// APPROVED and REJECTED are terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(ClaimStatus::Pending),
            "APPROVED" => Ok(ClaimStatus::Approved),
            "REJECTED" => Ok(ClaimStatus::Rejected),
            other => Err(RegistryError::validation(format!(
                "unknown claim status '{other}'"
            ))),
        }
    }
}

/// A user's assertion of ownership over a found item
///
/// The `verified` flag is redundant with `status` (true only for APPROVED)
/// and is kept in sync by the transition methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// The claimed item (immutable)
    pub item_id: ItemId,
    /// The claiming user (immutable)
    pub claimant_id: UserId,
    /// Claimant-supplied proof, judged by an administrator
    pub verification_answer: String,
    /// Server-assigned filing time
    pub claimed_at: DateTime<Utc>,
    /// Current workflow status
    pub status: ClaimStatus,
    /// True only once approved
    pub verified: bool,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Builds a new PENDING claim with a server-assigned timestamp
    ///
    /// The verification answer must be non-empty; item-side preconditions
    /// (FOUND status, claimant is not the reporter) are enforced by the
    /// claim lifecycle before the claim is committed.
    pub fn file(
        item_id: ItemId,
        claimant_id: UserId,
        verification_answer: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let verification_answer = verification_answer.into();
        if verification_answer.trim().is_empty() {
            return Err(RegistryError::validation(
                "verification answer is required",
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: ClaimId::new_v7(),
            item_id,
            claimant_id,
            verification_answer,
            claimed_at: now,
            status: ClaimStatus::Pending,
            verified: false,
            updated_at: now,
        })
    }

    /// Approves the claim, setting `verified`
    ///
    /// Returns `true` when the state changed. Re-approving an APPROVED
    /// claim is an idempotent no-op (`false`); approving a REJECTED claim
    /// is an invalid transition.
    pub fn approve(&mut self) -> Result<bool, RegistryError> {
        match self.status {
            ClaimStatus::Approved => Ok(false),
            ClaimStatus::Rejected => Err(RegistryError::invalid_state(
                ClaimStatus::Pending,
                self.status,
            )),
            ClaimStatus::Pending => {
                self.status = ClaimStatus::Approved;
                self.verified = true;
                self.updated_at = Utc::now();
                Ok(true)
            }
        }
    }

    /// Rejects the claim, clearing `verified`
    ///
    /// Returns `true` when the state changed. Re-rejecting is an idempotent
    /// no-op; rejecting an APPROVED claim is an invalid transition.
    pub fn reject(&mut self) -> Result<bool, RegistryError> {
        match self.status {
            ClaimStatus::Rejected => Ok(false),
            ClaimStatus::Approved => Err(RegistryError::invalid_state(
                ClaimStatus::Pending,
                self.status,
            )),
            ClaimStatus::Pending => {
                self.status = ClaimStatus::Rejected;
                self.verified = false;
                self.updated_at = Utc::now();
                Ok(true)
            }
        }
    }
}
