//! Inline SVG charts for the dashboard.
//!
//! Both charts plot probabilities, so the value axis is fixed to [0, 1].

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use bayespro_bayes::{BayesResult, SweepPoint};

use crate::theme::{ChartStyle, Theme};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 64.0;

const PLOT_W: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_H: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarGroup {
    Prior,
    Posterior,
}

impl BarGroup {
    pub fn legend(&self) -> &'static str {
        match self {
            BarGroup::Prior => "Prob. Previa",
            BarGroup::Posterior => "Prob. Posterior",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BarGroup::Prior => "#3498db",
            BarGroup::Posterior => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub group: BarGroup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    pub style: ChartStyle,
}

impl BarChart {
    /// Prior vs posterior bars for one result.
    pub fn bayes(result: &BayesResult, theme: Theme) -> Self {
        let a = &result.label_a;
        let b = &result.label_b;
        let bar = |label: String, value: f64, group: BarGroup| Bar {
            label,
            value,
            group,
        };
        Self {
            title: format!("Análisis Bayesiano: {a} vs {b}"),
            bars: vec![
                bar(format!("P({a})"), result.prior_a, BarGroup::Prior),
                bar(format!("P(¬{a})"), result.prior_not_a, BarGroup::Prior),
                bar(format!("P({a}|{b})"), result.posterior_a, BarGroup::Posterior),
                bar(format!("P(¬{a}|{b})"), result.posterior_not_a, BarGroup::Posterior),
            ],
            style: theme.chart_style(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut svg = open_svg(&self.title, &self.style);

        let slot = PLOT_W / self.bars.len().max(1) as f64;
        let bar_w = slot * 0.6;
        for (i, bar) in self.bars.iter().enumerate() {
            let value = bar.value.clamp(0.0, 1.0);
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_w) / 2.0;
            let h = value * PLOT_H;
            let y = MARGIN_TOP + PLOT_H - h;
            svg.push_str(&format!(
                r#"<rect class="bar" x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{h:.2}" fill="{}"><title>{}: {:.4}</title></rect>"#,
                bar.group.color(),
                encode_text(&bar.label),
                bar.value
            ));
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">{:.2}%</text>"#,
                x + bar_w / 2.0,
                y - 6.0,
                bar.value * 100.0
            ));
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">{}</text>"#,
                x + bar_w / 2.0,
                MARGIN_TOP + PLOT_H + 18.0,
                encode_text(&bar.label)
            ));
        }

        let mut legend_x = MARGIN_LEFT;
        for group in [BarGroup::Prior, BarGroup::Posterior] {
            svg.push_str(&format!(
                r#"<rect x="{legend_x:.2}" y="{:.2}" width="12" height="12" fill="{}"/><text x="{:.2}" y="{:.2}" font-size="12">{}</text>"#,
                HEIGHT - 24.0,
                group.color(),
                legend_x + 16.0,
                HEIGHT - 14.0,
                group.legend()
            ));
            legend_x += 140.0;
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Posterior as a function of the prior.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub points: Vec<SweepPoint>,
    pub style: ChartStyle,
}

impl LineChart {
    pub fn sensitivity(points: Vec<SweepPoint>, theme: Theme) -> Self {
        Self {
            title: "Análisis de Sensibilidad: P(A|B) según P(A)".to_string(),
            points,
            style: theme.chart_style(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut svg = open_svg(&self.title, &self.style);

        let coords = self
            .points
            .iter()
            .map(|p| {
                let x = MARGIN_LEFT + p.prior_a.clamp(0.0, 1.0) * PLOT_W;
                let y = MARGIN_TOP + PLOT_H - p.posterior_a.clamp(0.0, 1.0) * PLOT_H;
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            r##"<polyline class="curve" fill="none" stroke="#2ecc71" stroke-width="2" points="{coords}"/>"##
        ));

        for tick in 0..=5 {
            let v = tick as f64 / 5.0;
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11">{v:.1}</text>"#,
                MARGIN_LEFT + v * PLOT_W,
                MARGIN_TOP + PLOT_H + 16.0
            ));
        }
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12">P(A)</text>"#,
            MARGIN_LEFT + PLOT_W / 2.0,
            HEIGHT - 16.0
        ));

        svg.push_str("</svg>");
        svg
    }
}

/// Root element, background, title, value axis and grid.
fn open_svg(title: &str, style: &ChartStyle) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="100%" role="img" aria-label="{}" fill="{}" font-family="Arial, sans-serif">"#,
        encode_double_quoted_attribute(title),
        style.font_color
    );
    svg.push_str(&format!(
        r#"<rect class="background" x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="{}"/>"#,
        style.background
    ));
    svg.push_str(&format!(
        r#"<text x="{:.2}" y="28" text-anchor="middle" font-size="16">{}</text>"#,
        WIDTH / 2.0,
        encode_text(title)
    ));
    for tick in 0..=5 {
        let v = tick as f64 / 5.0;
        let y = MARGIN_TOP + PLOT_H - v * PLOT_H;
        svg.push_str(&format!(
            r#"<line x1="{MARGIN_LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}"/>"#,
            MARGIN_LEFT + PLOT_W,
            style.grid_color
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="11">{v:.1}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0
        ));
    }
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayespro_bayes::{compute, sweep, BayesInput, PriorRange};

    fn screening() -> BayesResult {
        compute(&BayesInput {
            label_a: "Enfermedad".into(),
            label_b: "Positivo".into(),
            prior_a: 0.02,
            sensitivity: 0.9,
            false_positive_rate: 0.01,
        })
        .unwrap()
    }

    #[test]
    fn bayes_chart_has_four_bars_in_order() {
        let r = screening();
        let chart = BarChart::bayes(&r, Theme::Light);

        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "P(Enfermedad)",
                "P(¬Enfermedad)",
                "P(Enfermedad|Positivo)",
                "P(¬Enfermedad|Positivo)"
            ]
        );
        assert_eq!(chart.bars[2].value, r.posterior_a);
        assert_eq!(chart.bars[0].group, BarGroup::Prior);
        assert_eq!(chart.bars[3].group, BarGroup::Posterior);
        assert_eq!(chart.title, "Análisis Bayesiano: Enfermedad vs Positivo");
    }

    #[test]
    fn theme_changes_styling_only() {
        let r = screening();
        let light = BarChart::bayes(&r, Theme::Light);
        let dark = BarChart::bayes(&r, Theme::Dark);

        assert_eq!(light.bars, dark.bars);
        assert!(dark.to_svg().contains(r##"fill="#303030""##));
        assert!(light.to_svg().contains(r#"class="background" x="0" y="0" width="640" height="400" fill="white""#));
    }

    #[test]
    fn svg_contains_every_bar_and_legend() {
        let svg = BarChart::bayes(&screening(), Theme::Light).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 4);
        assert!(svg.contains("64.75%"));
        assert!(svg.contains("Prob. Previa"));
        assert!(svg.contains("Prob. Posterior"));
    }

    #[test]
    fn sensitivity_chart_plots_each_point() {
        let points = sweep(0.9, 0.01, PriorRange::full(), 0.25).unwrap();
        let svg = LineChart::sensitivity(points, Theme::Dark).to_svg();
        let polyline = svg.split("points=\"").nth(1).unwrap();
        let coords = polyline.split('"').next().unwrap();
        assert_eq!(coords.split(' ').count(), 5);
    }
}
