use serde::{Deserialize, Serialize};

use bayespro_bayes::BayesInput;

pub const DEFAULT_LABEL_A: &str = "Evento A";
pub const DEFAULT_LABEL_B: &str = "Evento B";

/// A user action on the dashboard.
///
/// Events are:
/// - **explicit** about their trigger (no inference from a UI context)
/// - **transient** (nothing is persisted)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "dashboard.calculate_requested").
    fn event_type(&self) -> &'static str;
}

/// Raw form state as submitted by the UI. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub label_a: Option<String>,
    #[serde(default)]
    pub label_b: Option<String>,
    #[serde(default)]
    pub prior_a: Option<f64>,
    #[serde(default)]
    pub sensitivity: Option<f64>,
    #[serde(default)]
    pub false_positive_rate: Option<f64>,
}

impl FormInput {
    /// Calculator input, or `None` when a required number is missing.
    ///
    /// Empty labels fall back to "Evento A" / "Evento B".
    pub fn to_input(&self) -> Option<BayesInput> {
        Some(BayesInput {
            label_a: label_or(self.label_a.as_deref(), DEFAULT_LABEL_A),
            label_b: label_or(self.label_b.as_deref(), DEFAULT_LABEL_B),
            prior_a: self.prior_a?,
            sensitivity: self.sensitivity?,
            false_positive_rate: self.false_positive_rate?,
        })
    }
}

fn label_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "form", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The "Calcular" button.
    CalculateRequested(FormInput),
    /// The theme button. Carries the current form so the chart can be redrawn.
    ThemeToggled(FormInput),
    /// The "Exportar Reporte" button.
    ExportRequested,
}

impl Event for DashboardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::CalculateRequested(_) => "dashboard.calculate_requested",
            DashboardEvent::ThemeToggled(_) => "dashboard.theme_toggled",
            DashboardEvent::ExportRequested => "dashboard.export_requested",
        }
    }
}
