// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Cahier specification composer.

use serde::{Deserialize, Serialize};

/// A titled block of body text within a specification document.
///
/// `content` may contain embedded `\n` characters; renderers must preserve
/// them as explicit line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The normalized project-description document record.
///
/// A freshly composed record has no `id`; the remote store assigns one when
/// the record is created. Field names follow the REST backend's camelCase
/// wire format. Scalar fields default to empty strings — the builder replaces
/// missing input with readable placeholders before anything is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub project_name: String,
    pub project_type: String,
    pub company_name: String,
    pub company_description: String,
    pub primary_objective: String,
    pub budget: String,
    pub timeline: String,
    pub technical_requirements: String,
    /// Document body in reading order. Sections with empty content are
    /// pruned at build time — the document never shows an empty heading.
    pub sections: Vec<Section>,
}

/// The signed-in principal.
///
/// Exclusively owned by the session store; persisted as serialized JSON
/// under a single fixed storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Lifecycle stages of a document export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStage {
    /// No export in progress.
    Idle,
    /// Rendering the document and generating the PDF.
    Rendering,
    /// Writing the file and submitting to the remote store.
    Saving,
    /// Export finished — short-lived acknowledgement badge.
    Completed,
}

impl ExportStage {
    /// Whether an export is currently in flight. The download control is
    /// disabled while this is true.
    pub fn in_progress(self) -> bool {
        matches!(self, Self::Rendering | Self::Saving)
    }
}

/// Which surface the preview screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// The single rendered document.
    Document,
    /// The list of remotely stored specifications.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_specification_omits_id_on_the_wire() {
        let spec = Specification {
            project_name: "Tasks".into(),
            ..Specification::default()
        };
        let json = serde_json::to_string(&spec).expect("serialize");
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"projectName\":\"Tasks\""));
    }

    #[test]
    fn stored_specification_round_trips_with_id() {
        let spec = Specification {
            id: Some("17".into()),
            project_name: "Tasks".into(),
            sections: vec![Section::new("Objectifs", "line one\nline two")],
            ..Specification::default()
        };
        let json = serde_json::to_string(&spec).expect("serialize");
        let back: Specification = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, spec);
    }

    #[test]
    fn partial_wire_record_fills_defaults() {
        // The backend may omit fields it never received; they default.
        let back: Specification =
            serde_json::from_str(r#"{"id":"3","projectName":"P"}"#).expect("deserialize");
        assert_eq!(back.id.as_deref(), Some("3"));
        assert_eq!(back.project_name, "P");
        assert!(back.sections.is_empty());
        assert!(back.budget.is_empty());
    }

    #[test]
    fn export_stage_in_progress() {
        assert!(ExportStage::Rendering.in_progress());
        assert!(ExportStage::Saving.in_progress());
        assert!(!ExportStage::Idle.in_progress());
        assert!(!ExportStage::Completed.in_progress());
    }
}
