//! HTTP API Layer
//!
//! This crate provides the REST API for the lost-and-found registry using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each domain
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! Handlers call the domain lifecycle services, never the stores directly;
//! the services are wired over the PostgreSQL adapters at startup (or over
//! in-memory adapters in tests).
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(pool));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimLifecycle;
use domain_directory::Directory;
use domain_items::ItemLifecycle;
use infra_db::{PgCategoryStore, PgClaimStore, PgDepartmentStore, PgItemStore, PgUserStore};

use crate::handlers::{claims, directory, health, items};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub items: ItemLifecycle,
    pub claims: ClaimLifecycle,
    pub directory: Directory,
}

impl AppState {
    /// Wires the lifecycle services over the PostgreSQL adapters
    pub fn new(pool: PgPool) -> Self {
        let item_store = Arc::new(PgItemStore::new(pool.clone()));
        let claim_store = Arc::new(PgClaimStore::new(pool.clone()));
        let user_store = Arc::new(PgUserStore::new(pool.clone()));
        let category_store = Arc::new(PgCategoryStore::new(pool.clone()));
        let department_store = Arc::new(PgDepartmentStore::new(pool.clone()));

        Self {
            items: ItemLifecycle::new(item_store.clone()),
            claims: ClaimLifecycle::new(claim_store, item_store, user_store.clone()),
            directory: Directory::new(user_store, category_store, department_store),
            pool,
        }
    }

    /// Builds state from pre-wired services (tests inject in-memory stores)
    pub fn with_services(
        pool: PgPool,
        items: ItemLifecycle,
        claims: ClaimLifecycle,
        directory: Directory,
    ) -> Self {
        Self {
            pool,
            items,
            claims,
            directory,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    // Public routes (no /api/v1 prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Item routes
    let item_routes = Router::new()
        .route("/", post(items::create_item))
        .route("/", get(items::list_items))
        .route("/search", get(items::search_items))
        .route("/status/:status", get(items::list_by_status))
        .route("/user/:user_id", get(items::list_by_user))
        .route("/category/:category_id", get(items::list_by_category))
        .route(
            "/department/:department_id",
            get(items::list_by_department),
        )
        .route("/:id", get(items::get_item))
        .route("/:id", put(items::update_item))
        .route("/:id", delete(items::delete_item))
        .route("/:id/status", put(items::update_item_status))
        .route("/:id/claim", post(items::claim_item));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", post(claims::file_claim))
        .route("/", get(claims::list_claims))
        .route("/pending", get(claims::list_pending_claims))
        .route("/verified", get(claims::list_verified_claims))
        .route("/user/:user_id", get(claims::list_by_user))
        .route("/item/:item_id", get(claims::list_by_item))
        .route("/:id", get(claims::get_claim))
        .route("/:id", delete(claims::delete_claim))
        .route("/:id/approve", put(claims::approve_claim))
        .route("/:id/reject", put(claims::reject_claim));

    // User routes
    let user_routes = Router::new()
        .route("/register", post(directory::register_user))
        .route("/login", post(directory::login))
        .route("/", get(directory::list_users))
        .route("/:id", get(directory::get_user))
        .route("/:id", put(directory::update_user))
        .route("/:id", delete(directory::delete_user));

    // Category routes
    let category_routes = Router::new()
        .route("/", post(directory::create_category))
        .route("/", get(directory::list_categories))
        .route("/:id", get(directory::get_category))
        .route("/:id", put(directory::update_category))
        .route("/:id", delete(directory::delete_category));

    // Department routes
    let department_routes = Router::new()
        .route("/", post(directory::create_department))
        .route("/", get(directory::list_departments))
        .route("/:id", get(directory::get_department))
        .route("/:id", put(directory::update_department))
        .route("/:id", delete(directory::delete_department));

    let api_routes = Router::new()
        .nest("/items", item_routes)
        .nest("/claims", claim_routes)
        .nest("/users", user_routes)
        .nest("/categories", category_routes)
        .nest("/departments", department_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
