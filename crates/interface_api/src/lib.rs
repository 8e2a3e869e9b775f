//! HTTP API Layer
//!
//! This crate exposes the property management core over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: dashboard, damage fix confirmation and role-scoped updates
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Store**: In-memory adapter serving the property and damage ports
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::in_memory(config, store, localizer);
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{Clock, HealthCheckable, SystemClock};
use domain_damage::DamageService;
use domain_dashboard::{Localizer, ReminderEngine};
use domain_property::PropertyPort;

use crate::config::ApiConfig;
use crate::handlers::{damages, dashboard, health};
use crate::middleware::{audit_middleware, auth_middleware};
use crate::store::InMemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub properties: Arc<dyn PropertyPort>,
    pub damages: DamageService,
    pub engine: ReminderEngine,
    pub clock: Arc<dyn Clock>,
    pub health: Arc<dyn HealthCheckable>,
}

impl AppState {
    /// Wires every port to one in-memory store, on the system clock
    pub fn in_memory(config: ApiConfig, store: InMemoryStore, localizer: Arc<Localizer>) -> Self {
        Self::in_memory_with_clock(config, store, localizer, Arc::new(SystemClock))
    }

    /// Same as [`AppState::in_memory`] with an explicit clock
    pub fn in_memory_with_clock(
        config: ApiConfig,
        store: InMemoryStore,
        localizer: Arc<Localizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store = Arc::new(store);

        Self {
            config,
            properties: store.clone(),
            damages: DamageService::with_clock(store.clone(), clock.clone()),
            engine: ReminderEngine::new(localizer),
            clock,
            health: store,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Ports, services and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Damage routes
    let damage_routes = Router::new()
        .route("/damages/:id/fixed", put(damages::mark_fixed))
        .route("/owner/damages/:id", patch(damages::update_as_owner))
        .route("/tenant/damages/:id", patch(damages::update_as_tenant));

    // Protected API routes
    let api_routes = Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .merge(damage_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
