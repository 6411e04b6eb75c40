//! Human-readable view of a [`BayesResult`] and the detailed results panel.

use html_escape::encode_text;
use serde::{Deserialize, Serialize};

use bayespro_bayes::BayesResult;

/// Timestamp layout used in views and documents.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One probability rendered two ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedProbability {
    /// Rounded to 4 decimal places, e.g. `"0.6475"`.
    pub decimal: String,
    /// Percentage with 2 decimal places, e.g. `"64.75%"`.
    pub percent: String,
}

impl FormattedProbability {
    pub fn of(value: f64) -> Self {
        Self {
            decimal: format!("{value:.4}"),
            percent: format!("{:.2}%", value * 100.0),
        }
    }

    /// `"0.6475 (64.75%)"`.
    pub fn both(&self) -> String {
        format!("{} ({})", self.decimal, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub label_a: String,
    pub label_b: String,
    pub prior_a: FormattedProbability,
    pub prior_not_a: FormattedProbability,
    pub sensitivity: FormattedProbability,
    pub false_positive_rate: FormattedProbability,
    pub evidence_probability: FormattedProbability,
    pub posterior_a: FormattedProbability,
    pub posterior_not_a: FormattedProbability,
    pub computed_at: String,
}

impl ReportView {
    /// `P(A)` spelled with the event label.
    pub fn p_a(&self) -> String {
        format!("P({})", self.label_a)
    }

    pub fn p_b_given_a(&self) -> String {
        format!("P({}|{})", self.label_b, self.label_a)
    }

    pub fn p_b_given_not_a(&self) -> String {
        format!("P({}|¬{})", self.label_b, self.label_a)
    }

    pub fn p_a_given_b(&self) -> String {
        format!("P({}|{})", self.label_a, self.label_b)
    }

    pub fn p_b(&self) -> String {
        format!("P({})", self.label_b)
    }
}

/// Format a result for display. No validation: assumes a well-formed result.
pub fn format(result: &BayesResult) -> ReportView {
    ReportView {
        label_a: result.label_a.clone(),
        label_b: result.label_b.clone(),
        prior_a: FormattedProbability::of(result.prior_a),
        prior_not_a: FormattedProbability::of(result.prior_not_a),
        sensitivity: FormattedProbability::of(result.sensitivity),
        false_positive_rate: FormattedProbability::of(result.false_positive_rate),
        evidence_probability: FormattedProbability::of(result.evidence_probability),
        posterior_a: FormattedProbability::of(result.posterior_a),
        posterior_not_a: FormattedProbability::of(result.posterior_not_a),
        computed_at: result.computed_at.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Detailed results card shown next to the chart.
pub fn render_panel(view: &ReportView) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="card">"#);
    html.push_str(r#"<div class="card-header fw-bold">Resultados Bayesianos Detallados</div>"#);
    html.push_str(r#"<div class="card-body">"#);
    html.push_str(&format!(
        r#"<h4 class="lead">Probabilidad inicial {}: {}</h4>"#,
        encode_text(&view.p_a()),
        view.prior_a.percent
    ));
    html.push_str(&format!(
        "<p>Sensibilidad {}: {}</p>",
        encode_text(&view.p_b_given_a()),
        view.sensitivity.percent
    ));
    html.push_str(&format!(
        "<p>Falsos positivos {}: {}</p>",
        encode_text(&view.p_b_given_not_a()),
        view.false_positive_rate.percent
    ));
    html.push_str("<hr>");
    html.push_str(&format!(
        r#"<h4 class="text-success fw-bold">Probabilidad posterior {} = {}</h4>"#,
        encode_text(&view.p_a_given_b()),
        view.posterior_a.percent
    ));
    html.push_str(
        r#"<p class="text-muted">Probabilidad actualizada después de observar la evidencia</p>"#,
    );
    html.push_str("<hr>");
    html.push_str(&format!(
        "<p>{} = {} (Probabilidad total de la evidencia)</p>",
        encode_text(&view.p_b()),
        view.evidence_probability.percent
    ));
    html.push_str(&format!(
        r#"<p class="small text-muted">Calculado: {}</p>"#,
        encode_text(&view.computed_at)
    ));
    html.push_str("</div></div>");
    html
}

/// Styled error message that replaces the results panel.
pub fn render_error_panel(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">Error: {}</div>"#,
        encode_text(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayespro_bayes::{compute_at, BayesInput};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn result(prior_a: f64, sensitivity: f64, false_positive_rate: f64) -> BayesResult {
        let input = BayesInput {
            label_a: "Enfermedad".into(),
            label_b: "Positivo".into(),
            prior_a,
            sensitivity,
            false_positive_rate,
        };
        compute_at(&input, Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap()).unwrap()
    }

    fn parse_percent(s: &str) -> f64 {
        s.trim_end_matches('%').parse().unwrap()
    }

    #[test]
    fn screening_scenario_formats_as_expected() {
        let view = format(&result(0.02, 0.9, 0.01));
        assert_eq!(view.posterior_a.percent, "64.75%");
        assert_eq!(view.posterior_a.decimal, "0.6475");
        assert_eq!(view.evidence_probability.percent, "2.78%");
        assert_eq!(view.evidence_probability.decimal, "0.0278");
        assert_eq!(view.prior_a.percent, "2.00%");
        assert_eq!(view.prior_not_a.percent, "98.00%");
        assert_eq!(view.computed_at, "2024-03-01 09:05:07");
        assert_eq!(view.posterior_a.both(), "0.6475 (64.75%)");
    }

    #[test]
    fn panel_uses_labels_and_escapes_them() {
        let mut r = result(0.02, 0.9, 0.01);
        r.label_a = "<b>A</b>".into();
        let html = render_panel(&format(&r));
        assert!(html.contains("&lt;b&gt;A&lt;/b&gt;"));
        assert!(!html.contains("<b>A</b>"));
        assert!(html.contains("64.75%"));
        assert!(html.contains("Probabilidad total de la evidencia"));
    }

    #[test]
    fn error_panel_is_escaped() {
        let html = render_error_panel("bad <input>");
        assert_eq!(html, r#"<div class="alert alert-danger">Error: bad &lt;input&gt;</div>"#);
    }

    #[test]
    fn format_is_deterministic() {
        let r = result(0.3, 0.7, 0.2);
        assert_eq!(format(&r), format(&r));
    }

    proptest! {
        #[test]
        fn percent_strings_match_values_to_two_decimals(
            p in 0.0f64..=1.0,
            s in 0.0f64..=1.0,
            f in 0.0f64..=1.0,
        ) {
            let r = result(p, s, f);
            let view = format(&r);
            let pairs = [
                (&view.prior_a, r.prior_a),
                (&view.prior_not_a, r.prior_not_a),
                (&view.evidence_probability, r.evidence_probability),
                (&view.posterior_a, r.posterior_a),
                (&view.posterior_not_a, r.posterior_not_a),
            ];
            for (formatted, value) in pairs {
                let parsed = parse_percent(&formatted.percent);
                prop_assert!((parsed - value * 100.0).abs() <= 0.005 + 1e-9);
                let decimal: f64 = formatted.decimal.parse().unwrap();
                prop_assert!((decimal - value).abs() <= 0.00005 + 1e-12);
            }
        }
    }
}
