// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge — filesystem-backed capabilities for desktop and CI builds.
//
// File export writes into an `exports/` subdirectory of the data dir and
// key-value records live as one file per key under `kv/`. Share sheet and
// print dialog are mobile-only and report `PlatformUnavailable` here.

use std::path::PathBuf;

use cahier_core::error::{CahierError, Result};
use tracing::{debug, info, warn};

use crate::traits::{
    NativeFileExport, NativeKeyValueStorage, NativePrintDialog, NativeShare, PlatformBridge,
};

/// Filesystem-backed bridge used on non-mobile platforms.
pub struct DesktopBridge {
    export_dir: PathBuf,
    kv_dir: PathBuf,
}

impl DesktopBridge {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            export_dir: data_dir.join("exports"),
            kv_dir: data_dir.join("kv"),
        }
    }

    /// Path of the file holding `key`.
    ///
    /// Anything outside [A-Za-z0-9_-] maps to '_' so a key can never escape
    /// the storage directory.
    fn kv_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.kv_dir.join(safe)
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeFileExport for DesktopBridge {
    fn save_document(&self, document: &[u8], file_name: &str) -> Result<String> {
        std::fs::create_dir_all(&self.export_dir)
            .map_err(|e| CahierError::Export(format!("create export dir: {e}")))?;

        let path = self.export_dir.join(file_name);
        std::fs::write(&path, document)
            .map_err(|e| CahierError::Export(format!("write {}: {e}", path.display())))?;

        info!(path = %path.display(), bytes = document.len(), "document exported");
        Ok(path.to_string_lossy().into_owned())
    }
}

impl NativeShare for DesktopBridge {
    fn share_file(&self, _path: &str, _mime_type: &str) -> Result<()> {
        warn!("NativeShare::share_file called on desktop bridge");
        Err(CahierError::PlatformUnavailable)
    }
}

impl NativePrintDialog for DesktopBridge {
    fn show_print_dialog(&self, _document: &[u8], _mime_type: &str) -> Result<()> {
        warn!("NativePrintDialog::show_print_dialog called on desktop bridge");
        Err(CahierError::PlatformUnavailable)
    }
}

impl NativeKeyValueStorage for DesktopBridge {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.kv_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CahierError::SessionStorage(format!("read {key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.kv_dir)
            .map_err(|e| CahierError::SessionStorage(format!("create kv dir: {e}")))?;
        std::fs::write(self.kv_path(key), value)
            .map_err(|e| CahierError::SessionStorage(format!("write {key}: {e}")))?;
        debug!(key, "key-value record written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.kv_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CahierError::SessionStorage(format!("remove {key}: {e}"))),
        }
    }
}
