use axum::{
    routing::{get, post},
    Router,
};

pub mod dashboard;
pub mod page;
pub mod system;

/// Router for the page and the dashboard endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/state", get(system::state))
        .route("/api/calculate", post(dashboard::calculate))
        .route("/api/theme", post(dashboard::toggle_theme))
        .route("/api/export", get(dashboard::export))
        .route("/api/report", get(dashboard::report))
        .route("/api/sensitivity", get(dashboard::sensitivity))
        .route("/api/controls/sync", post(dashboard::sync_control))
}
