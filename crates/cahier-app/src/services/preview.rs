// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Specification preview pipeline — the orchestrator behind the preview
// screen. Owns the displayed record, the stored-record cache, and the export
// lifecycle.
//
// State lives behind a mutex that is never held across an await: methods
// lock briefly to check-and-set, run the async boundary call, then lock
// again to publish the outcome. Ordering guarantees: store submission
// strictly follows successful file generation, and the post-save list
// refresh strictly follows the save acknowledgement.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use cahier_bridge::traits::PlatformBridge;
use cahier_core::error::CahierError;
use cahier_core::notices::notice_for;
use cahier_core::types::{ExportStage, ViewMode};
use cahier_document::builder::DraftParams;
use cahier_document::{PdfWriter, export_file_name, render_markup};
use cahier_store::SpecificationStore;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::state::PreviewState;

/// How long the "completed" badge stays up before auto-clearing.
const COMPLETED_BADGE_TTL: Duration = Duration::from_secs(3);

/// MIME type of exported documents.
const PDF_MIME: &str = "application/pdf";

struct Inner {
    state: PreviewState,
    /// Bumped by every export; lets a newer export supersede the pending
    /// badge auto-clear of an older one.
    export_generation: u64,
}

/// Cheaply cloneable pipeline handle shared with the UI shell.
#[derive(Clone)]
pub struct PreviewService {
    store: Arc<dyn SpecificationStore>,
    bridge: Arc<dyn PlatformBridge>,
    inner: Arc<Mutex<Inner>>,
}

impl PreviewService {
    pub fn new(store: Arc<dyn SpecificationStore>, bridge: Arc<dyn PlatformBridge>) -> Self {
        Self {
            store,
            bridge,
            inner: Arc::new(Mutex::new(Inner {
                state: PreviewState::default(),
                export_generation: 0,
            })),
        }
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> PreviewState {
        self.inner.lock().expect("preview lock poisoned").state.clone()
    }

    /// Enter the screen: build the record from navigation parameters, or
    /// fall back to the built-in sample, then fetch the stored list once.
    pub async fn open(&self, params: Option<DraftParams>) {
        let spec = match params {
            Some(params) => params.build(),
            None => cahier_document::sample(),
        };
        info!(project = %spec.project_name, "preview opened");

        {
            let mut inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.specification = spec;
            inner.state.view = ViewMode::Document;
            inner.state.status_message = None;
        }

        self.refresh_stored().await;
    }

    /// Rendered markup for the current record.
    pub fn markup(&self) -> String {
        let spec = {
            let inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.specification.clone()
        };
        render_markup(&spec, Utc::now().date_naive())
    }

    /// Export the displayed record to a PDF file and persist it remotely.
    ///
    /// A second invocation while one is in flight is a no-op (the download
    /// control is disabled meanwhile). On success the record adopts the id
    /// assigned by the store and the stored list refreshes exactly once; on
    /// any failure the stage returns to `Idle` with an inline notice and the
    /// acknowledgement badge is never shown.
    pub async fn export(&self) {
        // Claim the export slot, or bail if one is already running.
        let (spec, generation) = {
            let mut inner = self.inner.lock().expect("preview lock poisoned");
            if inner.state.stage.in_progress() {
                debug!("export already in progress — ignoring");
                return;
            }
            inner.state.stage = ExportStage::Rendering;
            inner.state.status_message = None;
            inner.export_generation += 1;
            (inner.state.specification.clone(), inner.export_generation)
        };

        let now = Utc::now();
        let mut writer = PdfWriter::new();
        writer.set_title(&spec.project_name);
        let pdf = match writer.render_specification(&spec, now.date_naive()) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.fail_export(&e);
                return;
            }
        };

        let file_name = export_file_name(&spec.project_name, now);
        let path = match self.bridge.save_document(&pdf, &file_name) {
            Ok(path) => path,
            Err(e) => {
                self.fail_export(&e);
                return;
            }
        };

        {
            let mut inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.stage = ExportStage::Saving;
            inner.state.last_export_path = Some(path.clone());
        }

        // Store submission only happens after the file landed on disk. The
        // create body never carries an id; the store assigns one.
        let record = {
            let mut record = spec.clone();
            record.id = None;
            record
        };
        let created = match self.store.create(&record).await {
            Ok(created) => created,
            Err(e) => {
                self.fail_export(&e);
                return;
            }
        };

        {
            let mut inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.specification.id = created.id.clone();
            inner.state.stage = ExportStage::Completed;
        }
        info!(file = %path, id = ?created.id, "specification exported");

        self.spawn_badge_clear(generation);

        // The refresh strictly follows the save acknowledgement.
        self.refresh_stored().await;
    }

    /// Fetch the stored-specification list.
    ///
    /// A refresh requested while one is already outstanding is dropped; a
    /// failed fetch leaves the previous list untouched.
    pub async fn refresh_stored(&self) {
        {
            let mut inner = self.inner.lock().expect("preview lock poisoned");
            if inner.state.list_loading {
                debug!("list fetch already outstanding — dropping");
                return;
            }
            inner.state.list_loading = true;
        }

        match self.store.list_all().await {
            Ok(list) => {
                debug!(count = list.len(), "stored specifications fetched");
                let mut inner = self.inner.lock().expect("preview lock poisoned");
                inner.state.stored = list;
                inner.state.list_loading = false;
            }
            Err(e) => {
                warn!(error = %e, "stored-specification fetch failed — keeping previous list");
                let mut inner = self.inner.lock().expect("preview lock poisoned");
                inner.state.list_loading = false;
            }
        }
    }

    /// Replace the displayed record with a stored one and return to document
    /// mode. Out-of-range indices are ignored.
    pub fn select_stored(&self, index: usize) {
        let mut inner = self.inner.lock().expect("preview lock poisoned");
        if let Some(spec) = inner.state.stored.get(index).cloned() {
            inner.state.specification = spec;
            inner.state.view = ViewMode::Document;
        }
    }

    /// Switch between the document and the stored list.
    pub fn set_view(&self, view: ViewMode) {
        let mut inner = self.inner.lock().expect("preview lock poisoned");
        inner.state.view = view;
    }

    /// Share the most recent export through the platform share sheet.
    pub fn share(&self) {
        let path = {
            let inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.last_export_path.clone()
        };
        let Some(path) = path else {
            self.notify("Export the document before sharing it.");
            return;
        };
        if let Err(e) = self.bridge.share_file(&path, PDF_MIME) {
            warn!(error = %e, "share failed");
            self.notify(&notice_for(&e).message);
        }
    }

    /// Send the rendered document to the native print dialog.
    pub fn print(&self) {
        let spec = {
            let inner = self.inner.lock().expect("preview lock poisoned");
            inner.state.specification.clone()
        };
        let mut writer = PdfWriter::new();
        writer.set_title(&spec.project_name);
        match writer.render_specification(&spec, Utc::now().date_naive()) {
            Ok(bytes) => {
                if let Err(e) = self.bridge.show_print_dialog(&bytes, PDF_MIME) {
                    warn!(error = %e, "print dialog failed");
                    self.notify(&notice_for(&e).message);
                }
            }
            Err(e) => {
                error!(error = %e, "print rendering failed");
                self.notify(&notice_for(&e).message);
            }
        }
    }

    /// Clear the completed badge after its TTL unless a newer export
    /// superseded this one.
    fn spawn_badge_clear(&self, generation: u64) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(COMPLETED_BADGE_TTL).await;
            let mut inner = inner.lock().expect("preview lock poisoned");
            if inner.export_generation == generation
                && inner.state.stage == ExportStage::Completed
            {
                inner.state.stage = ExportStage::Idle;
            }
        });
    }

    fn fail_export(&self, err: &CahierError) {
        error!(error = %err, "export failed");
        let notice = notice_for(err);
        let mut inner = self.inner.lock().expect("preview lock poisoned");
        inner.state.stage = ExportStage::Idle;
        inner.state.status_message = Some(notice.message);
    }

    fn notify(&self, message: &str) {
        let mut inner = self.inner.lock().expect("preview lock poisoned");
        inner.state.status_message = Some(message.to_string());
    }
}
