// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// cahier-document — Document assembly and rendering for Cahier.
//
// Provides the parameter normalizer (`DraftParams` → `Specification`), the
// built-in sample fixture, the self-contained HTML markup renderer used for
// preview and export, PDF generation via printpdf, and export file naming.

pub mod builder;
pub mod export;
pub mod markup;
pub mod pdf;

// Re-export the primary entry points so callers can use `cahier_document::PdfWriter` etc.
pub use builder::{DraftParams, sample};
pub use export::export_file_name;
pub use markup::render_markup;
pub use pdf::PdfWriter;
