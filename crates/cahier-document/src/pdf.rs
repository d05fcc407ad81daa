// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF generation — render a specification to PDF bytes using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. The layout is a simple top-to-bottom flow with the
// built-in Helvetica fonts: document header, metadata lines, bold section
// headings, word-wrapped body text, automatic page breaks.

use cahier_core::error::{CahierError, Result};
use cahier_core::types::Specification;
use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use tracing::{debug, info, instrument};

// A4 page with uniform margins.
const PAGE_W_MM: f32 = 210.0;
const PAGE_H_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;

// 1 pt = 0.3528 mm; average Helvetica glyph width is roughly half the font
// size. Used to estimate characters per line for word wrapping.
const PT_TO_MM: f32 = 0.3528;
const AVG_GLYPH_FACTOR: f32 = 0.50;

/// One laid-out text line with its font and vertical advance.
struct Line {
    text: String,
    font: BuiltinFont,
    size_pt: f32,
    leading_pt: f32,
}

impl Line {
    fn new(text: impl Into<String>, font: BuiltinFont, size_pt: f32, leading_pt: f32) -> Self {
        Self {
            text: text.into(),
            font,
            size_pt,
            leading_pt,
        }
    }

    /// Vertical gap with no glyphs.
    fn gap(leading_pt: f32) -> Self {
        Self::new("", BuiltinFont::Helvetica, 0.0, leading_pt)
    }
}

/// Renders specification records as PDF documents.
pub struct PdfWriter {
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self { title: None }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Render the specification to PDF bytes.
    #[instrument(skip_all, fields(project = %spec.project_name, sections = spec.sections.len()))]
    pub fn render_specification(
        &self,
        spec: &Specification,
        generated_on: NaiveDate,
    ) -> Result<Vec<u8>> {
        let title = self.title.as_deref().unwrap_or("Cahier des charges");
        info!(title, "rendering specification PDF");

        let lines = compose_lines(spec, generated_on);
        if lines.is_empty() {
            return Err(CahierError::Pdf("nothing to render".into()));
        }

        let page_w = Mm(PAGE_W_MM);
        let page_h = Mm(PAGE_H_MM);
        let page_h_pt = page_h.into_pt().0;
        let margin_pt = Mm(MARGIN_MM).into_pt().0;

        let mut doc = PdfDocument::new(title);
        let mut pages: Vec<PdfPage> = Vec::new();
        let mut ops: Vec<Op> = Vec::new();
        let mut y_pt = page_h_pt - margin_pt;

        for line in &lines {
            if y_pt - line.leading_pt < margin_pt {
                pages.push(PdfPage::new(page_w, page_h, std::mem::take(&mut ops)));
                y_pt = page_h_pt - margin_pt;
            }
            y_pt -= line.leading_pt;

            if line.text.is_empty() {
                continue;
            }

            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(margin_pt),
                    y: Pt(y_pt),
                },
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(line.size_pt),
                font: line.font,
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.text.clone())],
                font: line.font,
            });
            ops.push(Op::EndTextSection);
        }
        pages.push(PdfPage::new(page_w, page_h, ops));

        doc.with_pages(pages);

        debug!(
            total_lines = lines.len(),
            pages = doc.pages.len(),
            "specification layout complete"
        );

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

// -- Layout -------------------------------------------------------------------

/// Compose the full line plan for a specification: header, metadata,
/// sections, footer.
fn compose_lines(spec: &Specification, generated_on: NaiveDate) -> Vec<Line> {
    let mut lines = Vec::new();

    lines.push(Line::new(
        "CAHIER DES CHARGES",
        BuiltinFont::HelveticaBold,
        20.0,
        26.0,
    ));
    for wrapped in wrap_text(&spec.project_name, max_chars(13.0)) {
        lines.push(Line::new(wrapped, BuiltinFont::Helvetica, 13.0, 18.0));
    }
    lines.push(Line::gap(10.0));

    for (label, value) in [
        ("Type de projet", &spec.project_type),
        ("Entreprise", &spec.company_name),
        ("Budget", &spec.budget),
        ("Délai", &spec.timeline),
    ] {
        for wrapped in wrap_text(&format!("{label} : {value}"), max_chars(10.5)) {
            lines.push(Line::new(wrapped, BuiltinFont::Helvetica, 10.5, 15.0));
        }
    }
    lines.push(Line::gap(12.0));

    for section in &spec.sections {
        if section.content.trim().is_empty() {
            continue;
        }
        for wrapped in wrap_text(&section.title, max_chars(13.0)) {
            lines.push(Line::new(wrapped, BuiltinFont::HelveticaBold, 13.0, 20.0));
        }
        for wrapped in wrap_text(&section.content, max_chars(10.5)) {
            lines.push(Line::new(wrapped, BuiltinFont::Helvetica, 10.5, 14.0));
        }
        lines.push(Line::gap(10.0));
    }

    lines.push(Line::gap(6.0));
    lines.push(Line::new(
        format!(
            "Document généré le {} par Cahier",
            generated_on.format("%d/%m/%Y")
        ),
        BuiltinFont::HelveticaOblique,
        9.0,
        12.0,
    ));

    lines
}

/// Estimated characters per line at the given font size.
fn max_chars(size_pt: f32) -> usize {
    let usable_width_mm = PAGE_W_MM - 2.0 * MARGIN_MM;
    let avg_char_width_mm = AVG_GLYPH_FACTOR * size_pt * PT_TO_MM;
    (usable_width_mm / avg_char_width_mm) as usize
}

/// Wrap a multi-line string so that no line exceeds `max_width` characters.
///
/// Splits on existing newlines first, then performs simple word-wrap within
/// each paragraph. Words longer than `max_width` are force-broken.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.is_empty() {
            result.push(String::new());
            continue;
        }

        let mut current = String::with_capacity(max_width);
        for word in words {
            if word.chars().count() > max_width {
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > max_width {
                    let chunk: String = rest.drain(..max_width).collect();
                    result.push(chunk);
                }
                current = rest.into_iter().collect();
            } else if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                result.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            result.push(current);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::sample;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
    }

    #[test]
    fn sample_renders_to_pdf_bytes() {
        let mut writer = PdfWriter::new();
        writer.set_title("Application de gestion de tâches");

        let bytes = writer
            .render_specification(&sample(), generated_on())
            .expect("render");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 512);
    }

    #[test]
    fn longer_documents_produce_more_output() {
        let writer = PdfWriter::new();
        let small = sample();

        let mut large = sample();
        for section in &mut large.sections {
            section.content = section.content.repeat(20);
        }

        let small_bytes = writer
            .render_specification(&small, generated_on())
            .expect("render small");
        let large_bytes = writer
            .render_specification(&large, generated_on())
            .expect("render large");
        assert!(large_bytes.len() > small_bytes.len());
    }

    #[test]
    fn wrap_respects_max_width() {
        let wrapped = wrap_text("une application de gestion de tâches pour tous", 16);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 16));
        assert_eq!(wrapped.join(" "), "une application de gestion de tâches pour tous");
    }

    #[test]
    fn wrap_preserves_paragraph_breaks() {
        let wrapped = wrap_text("ligne un\nligne deux", 40);
        assert_eq!(wrapped, vec!["ligne un", "ligne deux"]);
    }

    #[test]
    fn wrap_force_breaks_oversized_words() {
        let wrapped = wrap_text("antidisestablishmentarianism", 10);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 10));
    }
}
