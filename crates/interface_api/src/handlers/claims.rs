//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{ClaimId, ItemId, UserId};

use crate::dto::claims::*;
use crate::error::ApiError;
use crate::AppState;

/// Files a claim on a found item
pub async fn file_claim(
    State(state): State<AppState>,
    Json(request): Json<FileClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let claim = state
        .claims
        .file_claim(request.item_id, request.user_id, request.verification_answer)
        .await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists all claims, newest first
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list_all().await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Lists unverified claims (awaiting review or rejected)
pub async fn list_pending_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.pending_claims().await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Lists approved (verified) claims
pub async fn list_verified_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.verified_claims().await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Gets a single claim
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.get_claim(id).await?;
    Ok(Json(claim.into()))
}

/// Lists claims filed by one user
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.claims_by_user(user_id).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Lists claims filed against one item
pub async fn list_by_item(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.claims_by_item(item_id).await?;
    Ok(Json(claims.into_iter().map(Into::into).collect()))
}

/// Approves a pending claim; the item is handed back (RETURNED)
pub async fn approve_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.approve_claim(id).await?;
    Ok(Json(claim.into()))
}

/// Rejects a pending claim; the item goes back to FOUND
pub async fn reject_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim = state.claims.reject_claim(id).await?;
    Ok(Json(claim.into()))
}

/// Deletes a claim (administrative action)
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<ClaimId>,
) -> Result<StatusCode, ApiError> {
    state.claims.delete_claim(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
