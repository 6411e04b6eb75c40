use serde::Deserialize;

use bayespro_bayes::BayesResult;
use bayespro_events::{ControlSource, Parameter, Rendered};
use bayespro_report::Theme;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SyncControlRequest {
    pub parameter: Parameter,
    pub edited: ControlSource,
    pub field: Option<f64>,
    pub slider: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SensitivityQuery {
    pub lo: Option<f64>,
    pub hi: Option<f64>,
    pub step: Option<f64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn result_to_json(result: &BayesResult) -> serde_json::Value {
    serde_json::json!({
        "label_a": result.label_a,
        "label_b": result.label_b,
        "prior_a": result.prior_a,
        "prior_not_a": result.prior_not_a,
        "sensitivity": result.sensitivity,
        "false_positive_rate": result.false_positive_rate,
        "evidence_probability": result.evidence_probability,
        "posterior_a": result.posterior_a,
        "posterior_not_a": result.posterior_not_a,
        "computed_at": result.computed_at.to_rfc3339(),
    })
}

pub fn theme_to_json(theme: Theme) -> serde_json::Value {
    serde_json::json!({
        "name": theme.as_str(),
        "toggle_caption": theme.toggle_caption(),
        "toggle_icon": theme.toggle_icon(),
    })
}

pub fn rendered_to_json(rendered: &Rendered) -> serde_json::Value {
    serde_json::json!({
        "status": "rendered",
        "theme": theme_to_json(rendered.theme),
        "toast": rendered.toast,
        "panel_html": rendered.panel_html,
        "chart_svg": rendered.chart_svg,
        "view": rendered.view,
        "result": result_to_json(&rendered.result),
    })
}
