//! Document rendering to binary report formats.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use thiserror::Error;

use crate::document::{Block, MarkupDocument};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("document has no content")]
    Empty,

    #[error("document does not fit on a single page ({lines} lines)")]
    Overflow { lines: usize },

    #[error("rendering failed: {0}")]
    Backend(String),
}

/// Turns a [`MarkupDocument`] into a downloadable binary.
pub trait DocumentRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &MarkupDocument) -> Result<Vec<u8>, RenderError>;
}

// A4 portrait, in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 56.0;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

#[derive(Debug, Copy, Clone)]
struct LineStyle {
    font: Name<'static>,
    size: f32,
    rgb: (f32, f32, f32),
    space_before: f32,
}

const TITLE: LineStyle = LineStyle {
    font: BOLD,
    size: 18.0,
    rgb: (0.173, 0.243, 0.314),
    space_before: 0.0,
};
const HEADING: LineStyle = LineStyle {
    font: BOLD,
    size: 14.0,
    rgb: (0.0, 0.0, 0.0),
    space_before: 14.0,
};
const BODY: LineStyle = LineStyle {
    font: REGULAR,
    size: 11.0,
    rgb: (0.0, 0.0, 0.0),
    space_before: 0.0,
};
const HIGHLIGHT: LineStyle = LineStyle {
    font: BOLD,
    size: 13.0,
    rgb: (0.153, 0.682, 0.376),
    space_before: 0.0,
};

/// Single-page A4 PDF using the standard Helvetica fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, document: &MarkupDocument) -> Result<Vec<u8>, RenderError> {
        let lines = layout(document);
        if lines.is_empty() {
            return Err(RenderError::Empty);
        }

        let mut content = Content::new();
        let mut y = PAGE_H - MARGIN;
        for (style, text) in &lines {
            y -= style.space_before + style.size * 1.4;
            if y < MARGIN {
                return Err(RenderError::Overflow { lines: lines.len() });
            }
            let (r, g, b) = style.rgb;
            content.set_fill_rgb(r, g, b);
            content.begin_text();
            content.set_font(style.font, style.size);
            content.next_line(MARGIN, y);
            content.show(Str(&win_ansi(text)));
            content.end_text();
        }

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let regular_id = Ref::new(4);
        let bold_id = Ref::new(5);
        let content_id = Ref::new(6);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id).kids([page_id]).count(1);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();

        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.stream(content_id, &content.finish());

        Ok(pdf.finish())
    }
}

/// Flatten the document into styled, wrapped lines.
fn layout(document: &MarkupDocument) -> Vec<(LineStyle, String)> {
    let mut lines = Vec::new();
    if !document.title.trim().is_empty() {
        push_wrapped(&mut lines, TITLE, &document.title);
    }
    for section in &document.sections {
        push_wrapped(&mut lines, HEADING, &section.heading);
        for block in &section.blocks {
            let style = match block {
                Block::Highlight { .. } => HIGHLIGHT,
                Block::Field { .. } | Block::Paragraph { .. } => BODY,
            };
            push_wrapped(&mut lines, style, &block.text());
        }
    }
    lines
}

fn push_wrapped(lines: &mut Vec<(LineStyle, String)>, style: LineStyle, text: &str) {
    // Helvetica averages roughly half an em per glyph.
    let max_chars = ((PAGE_W - 2.0 * MARGIN) / (style.size * 0.5)) as usize;
    let mut first = true;
    for line in wrap(text, max_chars.max(1)) {
        let mut style = style;
        if !first {
            style.space_before = 0.0;
        }
        first = false;
        lines.push((style, line));
    }
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(max_chars).collect();
            word = word.chars().skip(max_chars).collect();
            out.push(head);
        }
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > max_chars {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Encode text for a WinAnsi Type 1 font. Latin-1 maps one-to-one; anything
/// else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            code @ 0x20..=0x7e | code @ 0xa0..=0xff => code as u8,
            _ => b'?',
        })
        .collect()
}
