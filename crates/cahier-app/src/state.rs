// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display state for the specification preview screen.

use cahier_core::types::{ExportStage, Specification, ViewMode};

/// Snapshot of the preview screen, cloned out to the UI on every change.
#[derive(Debug, Clone)]
pub struct PreviewState {
    /// The record currently displayed in document mode.
    pub specification: Specification,
    /// Remotely stored records, shown in list mode.
    pub stored: Vec<Specification>,
    /// Whether the document or the stored list is visible.
    pub view: ViewMode,
    /// Current export lifecycle stage.
    pub stage: ExportStage,
    /// Whether a stored-list fetch is outstanding.
    pub list_loading: bool,
    /// Inline user-facing notice (export/store failures).
    pub status_message: Option<String>,
    /// Path of the most recent successful export.
    pub last_export_path: Option<String>,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            specification: cahier_document::sample(),
            stored: Vec::new(),
            view: ViewMode::Document,
            stage: ExportStage::Idle,
            list_loading: false,
            status_message: None,
            last_export_path: None,
        }
    }
}
