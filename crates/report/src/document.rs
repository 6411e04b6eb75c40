//! Structured report document.
//!
//! The exported report is built as plain data (title, sections, blocks) and
//! then mapped to markup or handed to a [`DocumentRenderer`]. There is no
//! template engine involved.
//!
//! [`DocumentRenderer`]: crate::pdf::DocumentRenderer

use chrono::{DateTime, Utc};
use html_escape::encode_text;
use serde::{Deserialize, Serialize};

use bayespro_bayes::BayesResult;

use crate::view::{self, TIMESTAMP_FORMAT};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; }
h1 { color: #2c3e50; }
.card { border: 1px solid #ddd; padding: 15px; margin: 10px 0; }
.resultado { font-size: 1.2em; color: #27ae60; font-weight: bold; }";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Bold label followed by a value, e.g. "Evento A: Enfermedad".
    Field { label: String, value: String },
    Paragraph { text: String },
    /// Emphasized result line.
    Highlight { text: String },
}

impl Block {
    /// Plain-text rendering of the block (no markup).
    pub fn text(&self) -> String {
        match self {
            Block::Field { label, value } => format!("{label}: {value}"),
            Block::Paragraph { text } | Block::Highlight { text } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

impl MarkupDocument {
    /// Self-contained HTML page for the document.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Reporte Bayesiano</title>\n");
        html.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", encode_text(&self.title)));
        for section in &self.sections {
            html.push_str("<div class=\"card\">\n");
            html.push_str(&format!("<h2>{}</h2>\n", encode_text(&section.heading)));
            for block in &section.blocks {
                match block {
                    Block::Field { label, value } => html.push_str(&format!(
                        "<p><strong>{}:</strong> {}</p>\n",
                        encode_text(label),
                        encode_text(value)
                    )),
                    Block::Paragraph { text } => {
                        html.push_str(&format!("<p>{}</p>\n", encode_text(text)))
                    }
                    Block::Highlight { text } => html.push_str(&format!(
                        "<p class=\"resultado\">{}</p>\n",
                        encode_text(text)
                    )),
                }
            }
            html.push_str("</div>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Build the exported report for `result`. `generated_at` is the export time,
/// not the calculation time.
pub fn to_document(result: &BayesResult, generated_at: DateTime<Utc>) -> MarkupDocument {
    let v = view::format(result);

    let parameters = Section {
        heading: "Parámetros".to_string(),
        blocks: vec![
            Block::Field {
                label: "Evento A".to_string(),
                value: v.label_a.clone(),
            },
            Block::Field {
                label: "Evento B".to_string(),
                value: v.label_b.clone(),
            },
            Block::Paragraph {
                text: format!("P(A): {}", v.prior_a.both()),
            },
            Block::Paragraph {
                text: format!("P(B|A): {}", v.sensitivity.both()),
            },
            Block::Paragraph {
                text: format!("P(B|¬A): {}", v.false_positive_rate.both()),
            },
        ],
    };

    let results = Section {
        heading: "Resultados".to_string(),
        blocks: vec![
            Block::Highlight {
                text: format!("P(A|B) = {}", v.posterior_a.both()),
            },
            Block::Paragraph {
                text: format!("P(B) = {}", v.evidence_probability.both()),
            },
        ],
    };

    MarkupDocument {
        title: format!(
            "Reporte Bayesiano - {}",
            generated_at.format(TIMESTAMP_FORMAT)
        ),
        sections: vec![parameters, results],
    }
}
