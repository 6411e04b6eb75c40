//! Presentation of Bayesian results: text view, exported document, charts,
//! and the PDF export artifact.
//!
//! Everything here is a pure mapping from a [`BayesResult`] snapshot; the only
//! fallible step is turning a document into bytes.
//!
//! [`BayesResult`]: bayespro_bayes::BayesResult

pub mod chart;
pub mod document;
pub mod export;
pub mod pdf;
pub mod theme;
pub mod view;

pub use chart::{Bar, BarChart, BarGroup, LineChart};
pub use document::{to_document, Block, MarkupDocument, Section};
pub use export::{export, report_filename, ExportArtifact};
pub use pdf::{DocumentRenderer, PdfRenderer, RenderError};
pub use theme::{ChartStyle, Theme};
pub use view::{format, render_error_panel, render_panel, FormattedProbability, ReportView};
