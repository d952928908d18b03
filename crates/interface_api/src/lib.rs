//! HTTP API Layer
//!
//! REST surface for the rider desk using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: health check, catalog lookups, policy rider lifecycle
//! - **Middleware**: tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(service, config);
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_rider::RiderService;

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{health, riders, policy_riders};

/// Application state shared across handlers
///
/// The rider service is held for the life of the process; nothing is
/// persisted between restarts.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RwLock<RiderService>>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(service: RiderService, config: ApiConfig) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Rider service and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Catalog routes
    let rider_routes = Router::new()
        .route("/", get(riders::list_riders))
        .route("/:code", get(riders::get_rider));

    // Policy rider routes
    let policy_routes = Router::new()
        .route(
            "/:id/riders",
            get(policy_riders::list_policy_riders).post(policy_riders::attach_rider),
        )
        .route("/:id/riders/:code/activate", post(policy_riders::activate_rider))
        .route("/:id/riders/:code", delete(policy_riders::remove_rider));

    let api_routes = Router::new()
        .nest("/riders", rider_routes)
        .nest("/policies", policy_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
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
