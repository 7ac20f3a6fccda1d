//! Claim lifecycle tests covering the item/claim coordination invariants

use core_kernel::{ClaimId, ItemId, RegistryError, UserId};
use domain_claims::ClaimStatus;
use domain_items::ItemStatus;
use test_utils::TestRegistry;

#[tokio::test]
async fn test_file_claim_marks_item_claimed() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "blue backpack")
        .await
        .unwrap();

    assert_eq!(claim.status, ClaimStatus::Pending);
    assert!(!claim.verified);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Claimed));

    let pending = registry.claims.pending_claims().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, claim.id);
}

#[tokio::test]
async fn test_file_claim_on_claimed_item_fails() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let first = registry.seed_user().await;
    let second = registry.seed_user().await;

    registry
        .claims
        .file_claim(item.id, first.id, "has my initials")
        .await
        .unwrap();

    let err = registry
        .claims
        .file_claim(item.id, second.id, "red sticker on the back")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState { .. }));

    // Still exactly one claim
    assert_eq!(registry.claims.count_for_item(item.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_file_claim_on_lost_item_fails() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Lost).await;
    let claimant = registry.seed_user().await;

    let err = registry
        .claims
        .file_claim(item.id, claimant.id, "mine")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState { .. }));
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Lost));
}

#[tokio::test]
async fn test_self_claim_rejected_and_item_unchanged() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;

    let err = registry
        .claims
        .file_claim(item.id, item.reporter_id, "I reported it myself")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::SelfClaim));
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Found));
    assert_eq!(registry.store.claim_count(), 0);
}

#[tokio::test]
async fn test_file_claim_requires_answer() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let err = registry
        .claims
        .file_claim(item.id, claimant.id, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Found));
}

#[tokio::test]
async fn test_file_claim_unknown_item_or_user() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let err = registry
        .claims
        .file_claim(ItemId::new(), claimant.id, "mine")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));

    let err = registry
        .claims
        .file_claim(item.id, UserId::new(), "mine")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[tokio::test]
async fn test_reject_reverts_item_then_refile_succeeds() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let first = registry.seed_user().await;
    let second = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, first.id, "it has a dent")
        .await
        .unwrap();

    let rejected = registry.claims.reject_claim(claim.id).await.unwrap();
    assert_eq!(rejected.status, ClaimStatus::Rejected);
    assert!(!rejected.verified);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Found));

    // A different user can now claim the reopened item
    let second_claim = registry
        .claims
        .file_claim(item.id, second.id, "serial number matches")
        .await
        .unwrap();
    assert_eq!(second_claim.status, ClaimStatus::Pending);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Claimed));
}

#[tokio::test]
async fn test_approve_returns_item_and_is_idempotent() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "photo of me with it")
        .await
        .unwrap();

    let approved = registry.claims.approve_claim(claim.id).await.unwrap();
    assert_eq!(approved.status, ClaimStatus::Approved);
    assert!(approved.verified);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Returned));

    // Second approval is a no-op with the same resulting state
    let again = registry.claims.approve_claim(claim.id).await.unwrap();
    assert_eq!(again.status, ClaimStatus::Approved);
    assert!(again.verified);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Returned));
}

#[tokio::test]
async fn test_approve_rejected_claim_fails() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "green keychain")
        .await
        .unwrap();
    registry.claims.reject_claim(claim.id).await.unwrap();

    let err = registry.claims.approve_claim(claim.id).await.unwrap_err();
    assert!(matches!(err, RegistryError::InvalidState { .. }));
}

#[tokio::test]
async fn test_settle_unknown_claim() {
    let registry = TestRegistry::new();
    let err = registry.claims.approve_claim(ClaimId::new()).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));

    let err = registry.claims.reject_claim(ClaimId::new()).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[tokio::test]
async fn test_concurrent_claims_single_winner() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let alice = registry.seed_user().await;
    let bob = registry.seed_user().await;

    let claims_a = registry.claims.clone();
    let claims_b = registry.claims.clone();
    let item_id = item.id;

    let a = tokio::spawn(async move {
        claims_a.file_claim(item_id, alice.id, "left pocket is torn").await
    });
    let b = tokio::spawn(async move {
        claims_b.file_claim(item_id, bob.id, "has a campus sticker").await
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent claim may win");

    let loser = results.iter().find(|r| r.is_err()).unwrap();
    assert!(matches!(
        loser.as_ref().unwrap_err(),
        RegistryError::InvalidState { .. }
    ));

    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Claimed));
    assert_eq!(registry.claims.count_for_item(item.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_item_cascades_claims() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    registry
        .claims
        .file_claim(item.id, claimant.id, "broken zipper")
        .await
        .unwrap();
    assert_eq!(registry.store.claim_count(), 1);

    registry.items.delete_item(item.id).await.unwrap();
    assert_eq!(registry.store.claim_count(), 0);
}

#[tokio::test]
async fn test_claim_queries() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "name tag inside")
        .await
        .unwrap();

    let by_user = registry.claims.claims_by_user(claimant.id).await.unwrap();
    assert_eq!(by_user.len(), 1);

    let by_item = registry.claims.claims_by_item(item.id).await.unwrap();
    assert_eq!(by_item.len(), 1);

    assert!(registry.claims.verified_claims().await.unwrap().is_empty());

    registry.claims.approve_claim(claim.id).await.unwrap();
    assert_eq!(registry.claims.verified_claims().await.unwrap().len(), 1);
    assert!(registry.claims.pending_claims().await.unwrap().is_empty());
}

/// Worked example: FOUND item reported by user A; user B files with answer
/// "blue backpack"; rejection reopens the item.
#[tokio::test]
async fn test_worked_example_reject_reopens() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let user_b = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, user_b.id, "blue backpack")
        .await
        .unwrap();
    assert_eq!(claim.status, ClaimStatus::Pending);
    assert!(!claim.verified);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Claimed));

    let rejected = registry.claims.reject_claim(claim.id).await.unwrap();
    assert_eq!(rejected.status, ClaimStatus::Rejected);
    assert_eq!(registry.store.item_status(item.id), Some(ItemStatus::Found));
}

#[tokio::test]
async fn test_pending_listing_keeps_rejected_claims() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "scratched lid")
        .await
        .unwrap();
    registry.claims.reject_claim(claim.id).await.unwrap();

    // Rejected claims are unverified, so they remain in the pending view.
    let pending = registry.claims.pending_claims().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, claim.id);
    assert_eq!(pending[0].status, ClaimStatus::Rejected);
    assert!(registry.claims.verified_claims().await.unwrap().is_empty());
}
