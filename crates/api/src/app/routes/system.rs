use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::dto;
use crate::context::DashboardContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Current theme and the last result snapshot, if any.
pub async fn state(Extension(ctx): Extension<DashboardContext>) -> impl IntoResponse {
    let dashboard = ctx.lock().await;
    let session = dashboard.session();
    Json(serde_json::json!({
        "theme": dto::theme_to_json(session.theme()),
        "last_result": session.last_result().map(dto::result_to_json),
    }))
}
