use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Utc;

use bayespro_bayes::{sensitivity::DEFAULT_STEP, PriorRange};
use bayespro_events::{DashboardEvent, FormInput, LinkedControl, Outcome};

use crate::app::{dto, errors};
use crate::context::DashboardContext;

pub async fn calculate(
    Extension(ctx): Extension<DashboardContext>,
    Json(form): Json<FormInput>,
) -> axum::response::Response {
    dispatch(&ctx, DashboardEvent::CalculateRequested(form)).await
}

pub async fn toggle_theme(
    Extension(ctx): Extension<DashboardContext>,
    Json(form): Json<FormInput>,
) -> axum::response::Response {
    dispatch(&ctx, DashboardEvent::ThemeToggled(form)).await
}

pub async fn export(Extension(ctx): Extension<DashboardContext>) -> axum::response::Response {
    dispatch(&ctx, DashboardEvent::ExportRequested).await
}

/// HTML preview of the report for the last result.
pub async fn report(Extension(ctx): Extension<DashboardContext>) -> axum::response::Response {
    match ctx.lock().await.preview(Utc::now()) {
        Some(html) => Html(html).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn sensitivity(
    Extension(ctx): Extension<DashboardContext>,
    Query(q): Query<dto::SensitivityQuery>,
) -> axum::response::Response {
    let full = PriorRange::full();
    let range = PriorRange {
        lo: q.lo.unwrap_or(full.lo),
        hi: q.hi.unwrap_or(full.hi),
    };
    let step = q.step.unwrap_or(DEFAULT_STEP);

    let dashboard = ctx.lock().await;
    match dashboard.sensitivity(range, step) {
        None => StatusCode::NO_CONTENT.into_response(),
        Some(Err(e)) => errors::domain_error_to_response(e),
        Some(Ok(view)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "points": view.points,
                "chart_svg": view.chart_svg,
            })),
        )
            .into_response(),
    }
}

/// Mirror a field/slider edit: the edited control's value goes to both.
pub async fn sync_control(Json(body): Json<dto::SyncControlRequest>) -> impl IntoResponse {
    let resolved = LinkedControl {
        field: body.field,
        slider: body.slider,
    }
    .resolve(body.edited);

    Json(serde_json::json!({
        "parameter": body.parameter,
        "field": resolved.field,
        "slider": resolved.slider,
    }))
}

async fn dispatch(ctx: &DashboardContext, event: DashboardEvent) -> axum::response::Response {
    let reports_theme = matches!(event, DashboardEvent::ThemeToggled(_));
    let outcome = {
        let mut dashboard = ctx.lock().await;
        dashboard.handle(event, Utc::now())
    };

    match outcome {
        Outcome::Rendered(rendered) => {
            (StatusCode::OK, Json(dto::rendered_to_json(&rendered))).into_response()
        }
        Outcome::Skipped { theme } if reports_theme => skipped(theme),
        Outcome::Skipped { .. } => StatusCode::NO_CONTENT.into_response(),
        Outcome::Failed {
            message,
            panel_html,
            theme,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "status": "failed",
                "error": "computation_error",
                "message": message,
                "panel_html": panel_html,
                "theme": dto::theme_to_json(theme),
            })),
        )
            .into_response(),
        Outcome::Exported(artifact) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, artifact.content_type.clone()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", artifact.filename),
                ),
            ],
            artifact.bytes,
        )
            .into_response(),
        Outcome::NothingToExport => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Theme toggled but the form was incomplete: nothing to redraw except the
/// theme itself.
fn skipped(theme: bayespro_report::Theme) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "skipped",
            "theme": dto::theme_to_json(theme),
        })),
    )
        .into_response()
}
