//! Downloadable report artifact.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bayespro_bayes::BayesResult;

use crate::document::to_document;
use crate::pdf::DocumentRenderer;

pub const ERROR_FILENAME: &str = "error.txt";
pub const ERROR_CONTENT_TYPE: &str = "text/plain";

/// A file handed to the user: the rendered report, or the rendering error as
/// plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn is_error(&self) -> bool {
        self.filename == ERROR_FILENAME
    }
}

/// `reporte_bayesiano_<YYYYMMDD_HHMMSS>.<extension>`.
pub fn report_filename(now: DateTime<Utc>, extension: &str) -> String {
    format!("reporte_bayesiano_{}.{extension}", now.format("%Y%m%d_%H%M%S"))
}

/// Render `result` into a report. A rendering failure still yields an artifact
/// so the download never silently fails.
pub fn export(
    result: &BayesResult,
    renderer: &dyn DocumentRenderer,
    now: DateTime<Utc>,
) -> ExportArtifact {
    let document = to_document(result, now);
    match renderer.render(&document) {
        Ok(bytes) => {
            let filename = report_filename(now, renderer.extension());
            tracing::info!(filename = %filename, size = bytes.len(), "report exported");
            ExportArtifact {
                filename,
                content_type: renderer.content_type().to_string(),
                bytes,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "report rendering failed");
            ExportArtifact {
                filename: ERROR_FILENAME.to_string(),
                content_type: ERROR_CONTENT_TYPE.to_string(),
                bytes: e.to_string().into_bytes(),
            }
        }
    }
}
