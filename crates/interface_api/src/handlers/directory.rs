//! Directory handlers: users, categories, departments

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::{CategoryId, DepartmentId, UserId};

use crate::dto::directory::*;
use crate::error::ApiError;
use crate::AppState;

// --- users ---

/// Registers a new account
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.directory.register_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Verifies credentials against the stored bcrypt hash
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .directory
        .login(&request.login, &request.password)
        .await?;
    Ok(Json(user.into()))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.directory.list_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.directory.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Updates profile fields; credentials and role are untouched
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .directory
        .update_user_profile(id, request.first_name, request.last_name)
        .await?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, ApiError> {
    state.directory.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- categories ---

pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category = state.directory.create_category(request.name).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.directory.list_categories().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.directory.get_category(id).await?;
    Ok(Json(category.into()))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(request): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.directory.rename_category(id, request.name).await?;
    Ok(Json(category.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode, ApiError> {
    state.directory.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- departments ---

pub async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<DepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let department = state
        .directory
        .create_department(request.name, request.building)
        .await?;
    Ok((StatusCode::CREATED, Json(department.into())))
}

pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = state.directory.list_departments().await?;
    Ok(Json(departments.into_iter().map(Into::into).collect()))
}

pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = state.directory.get_department(id).await?;
    Ok(Json(department.into()))
}

pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
    Json(request): Json<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = state
        .directory
        .update_department(id, request.name, request.building)
        .await?;
    Ok(Json(department.into()))
}

pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<StatusCode, ApiError> {
    state.directory.delete_department(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
