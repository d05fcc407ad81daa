// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for mobile targets until the native iOS/Android bridges land.
//
// Every capability returns `PlatformUnavailable` — callers surface that as
// an inline notice.

use cahier_core::error::{CahierError, Result};

use crate::traits::{
    NativeFileExport, NativeKeyValueStorage, NativePrintDialog, NativeShare, PlatformBridge,
};

/// No-op bridge returned on targets without a native implementation.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Mobile (stub)"
    }
}

impl NativeFileExport for StubBridge {
    fn save_document(&self, _document: &[u8], _file_name: &str) -> Result<String> {
        tracing::warn!("NativeFileExport::save_document called on stub bridge");
        Err(CahierError::PlatformUnavailable)
    }
}

impl NativeShare for StubBridge {
    fn share_file(&self, _path: &str, _mime_type: &str) -> Result<()> {
        tracing::warn!("NativeShare::share_file called on stub bridge");
        Err(CahierError::PlatformUnavailable)
    }
}

impl NativePrintDialog for StubBridge {
    fn show_print_dialog(&self, _document: &[u8], _mime_type: &str) -> Result<()> {
        tracing::warn!("NativePrintDialog::show_print_dialog called on stub bridge");
        Err(CahierError::PlatformUnavailable)
    }
}

impl NativeKeyValueStorage for StubBridge {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(CahierError::PlatformUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(CahierError::PlatformUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(CahierError::PlatformUnavailable)
    }
}
