use chrono::{DateTime, Utc};

use bayespro_bayes::{compute_at, sweep, BayesResult, PriorRange, SweepPoint};
use bayespro_core::DomainResult;
use bayespro_report::{
    export, format, render_error_panel, render_panel, to_document, BarChart, DocumentRenderer, ExportArtifact,
    LineChart, PdfRenderer, ReportView, Theme,
};

use crate::event::{DashboardEvent, Event, FormInput};
use crate::session::Session;

/// A successful calculation, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub result: BayesResult,
    pub view: ReportView,
    pub panel_html: String,
    pub chart_svg: String,
    pub theme: Theme,
    /// Show the "updated" notification (explicit calculate only).
    pub toast: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rendered(Rendered),
    /// A required input was missing; nothing was computed.
    Skipped { theme: Theme },
    /// The calculation was rejected; the snapshot is unchanged.
    Failed {
        message: String,
        panel_html: String,
        theme: Theme,
    },
    Exported(ExportArtifact),
    /// Export requested before any calculation.
    NothingToExport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityView {
    pub points: Vec<SweepPoint>,
    pub chart_svg: String,
}

/// Owns the session and the report renderer; the single entry point for
/// every dashboard event.
pub struct Dashboard {
    session: Session,
    renderer: Box<dyn DocumentRenderer>,
}

impl Dashboard {
    pub fn new(theme: Theme) -> Self {
        Self::with_renderer(theme, Box::new(PdfRenderer::new()))
    }

    pub fn with_renderer(theme: Theme, renderer: Box<dyn DocumentRenderer>) -> Self {
        Self {
            session: Session::new(theme),
            renderer,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle(&mut self, event: DashboardEvent, now: DateTime<Utc>) -> Outcome {
        let span = tracing::info_span!("dashboard_event", event_type = event.event_type());
        let _guard = span.enter();

        match event {
            DashboardEvent::CalculateRequested(form) => self.calculate(&form, now, true),
            DashboardEvent::ThemeToggled(form) => {
                let theme = self.session.toggle_theme();
                tracing::debug!(theme = %theme, "theme toggled");
                self.calculate(&form, now, false)
            }
            DashboardEvent::ExportRequested => match self.session.last_result() {
                Some(result) => Outcome::Exported(export(result, self.renderer.as_ref(), now)),
                None => {
                    tracing::debug!("export requested without a result; ignoring");
                    Outcome::NothingToExport
                }
            },
        }
    }

    /// HTML rendering of the report that export would produce.
    /// `None` until a calculation has succeeded.
    pub fn preview(&self, now: DateTime<Utc>) -> Option<String> {
        let result = self.session.last_result()?;
        Some(to_document(result, now).to_html())
    }

    /// Sensitivity curve for the last result's test characteristics.
    /// `None` until a calculation has succeeded.
    pub fn sensitivity(
        &self,
        range: PriorRange,
        step: f64,
    ) -> Option<DomainResult<SensitivityView>> {
        let result = self.session.last_result()?;
        let view = sweep(result.sensitivity, result.false_positive_rate, range, step).map(
            |points| SensitivityView {
                chart_svg: LineChart::sensitivity(points.clone(), self.session.theme()).to_svg(),
                points,
            },
        );
        Some(view)
    }

    fn calculate(&mut self, form: &FormInput, now: DateTime<Utc>, toast: bool) -> Outcome {
        let theme = self.session.theme();
        let Some(input) = form.to_input() else {
            tracing::debug!("calculation skipped: missing input");
            return Outcome::Skipped { theme };
        };

        match compute_at(&input, now) {
            Ok(result) => {
                tracing::info!(
                    prior_a = result.prior_a,
                    evidence = result.evidence_probability,
                    posterior_a = result.posterior_a,
                    "posterior computed"
                );
                let view = format(&result);
                let rendered = Rendered {
                    panel_html: render_panel(&view),
                    chart_svg: BarChart::bayes(&result, theme).to_svg(),
                    view,
                    result: result.clone(),
                    theme,
                    toast,
                };
                self.session.replace_result(result);
                Outcome::Rendered(rendered)
            }
            Err(e) => {
                tracing::warn!(error = %e, "calculation failed");
                let message = e.to_string();
                Outcome::Failed {
                    panel_html: render_error_panel(&message),
                    message,
                    theme,
                }
            }
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
