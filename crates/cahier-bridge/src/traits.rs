// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// Capabilities a platform lacks return `CahierError::PlatformUnavailable`;
// callers surface that as an inline notice rather than treating it as fatal.

use cahier_core::error::Result;

/// Unified bridge that groups all native capabilities the app relies on.
pub trait PlatformBridge:
    NativeFileExport + NativeShare + NativePrintDialog + NativeKeyValueStorage
{
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Write a generated document to user-visible storage.
pub trait NativeFileExport: Send + Sync {
    /// Persist `document` under `file_name` in the platform's download area.
    /// Returns the absolute path of the written file.
    fn save_document(&self, document: &[u8], file_name: &str) -> Result<String>;
}

/// Share content with other apps via the OS share sheet.
pub trait NativeShare: Send + Sync {
    /// Share a previously exported file.
    /// Returns Ok(()) if the share sheet was presented (user may still cancel).
    fn share_file(&self, path: &str, mime_type: &str) -> Result<()>;
}

/// Send documents to the OS-level print dialog.
pub trait NativePrintDialog: Send + Sync {
    /// Open the native print dialog for the given document bytes.
    /// Returns Ok(()) if the dialog was presented (user may still cancel).
    fn show_print_dialog(&self, document: &[u8], mime_type: &str) -> Result<()>;
}

/// Small persistent key-value records (session identity, preferences).
pub trait NativeKeyValueStorage: Send + Sync {
    /// Read the value stored under `key`. Returns None if the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Succeeds if the key is absent.
    fn remove(&self, key: &str) -> Result<()>;
}
