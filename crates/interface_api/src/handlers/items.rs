//! Item handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::{CategoryId, DepartmentId, ItemId, UserId};
use domain_items::{ItemFilter, ItemStatus};

use crate::dto::claims::ClaimResponse;
use crate::dto::items::*;
use crate::error::ApiError;
use crate::AppState;

/// Reports a new item (LOST or FOUND, as declared by the reporter)
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = state.items.create_item(request.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

/// Lists all items, newest report first
pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.items.list_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Gets a single item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.items.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Lists items in one lifecycle status
pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let status: ItemStatus = status
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("unknown item status '{status}'")))?;
    let items = state.items.find(ItemFilter::by_status(status)).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Lists items reported by one user
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.items.find(ItemFilter::by_reporter(user_id)).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Lists items in one category
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state
        .items
        .find(ItemFilter::by_category(category_id))
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Lists items in one department
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<DepartmentId>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state
        .items
        .find(ItemFilter::by_department(department_id))
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Searches items by title and/or location substring
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state
        .items
        .find(ItemFilter::search(params.title, params.location))
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Full update of an item's descriptive fields
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(request): Json<CreateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.items.update_item(id, request.into()).await?;
    Ok(Json(item.into()))
}

/// Sets an item's lifecycle status directly (administrative edit)
pub async fn update_item_status(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(request): Json<UpdateItemStatusRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.items.set_status(id, request.status).await?;
    Ok(Json(item.into()))
}

/// Files a claim on this item; convenience route mirroring `POST /claims`
pub async fn claim_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(request): Json<ClaimItemRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let claim = state
        .claims
        .file_claim(id, request.user_id, request.verification_answer)
        .await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Deletes an item; its claims go with it
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, ApiError> {
    state.items.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
