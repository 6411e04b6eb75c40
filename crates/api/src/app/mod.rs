//! HTTP application wiring (Axum router + session wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use bayespro_events::Dashboard;

use crate::config::Config;
use crate::context::DashboardContext;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    build_app_with(Dashboard::new(config.theme))
}

/// Build the router around an existing dashboard (custom renderer, tests).
pub fn build_app_with(dashboard: Dashboard) -> Router {
    let context = DashboardContext::new(dashboard);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(context)),
        )
}
