// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native platform capability abstractions.
//
// The document pipeline and the session store never touch device APIs
// directly: file export, the share sheet, the print dialog, and persistent
// key-value records are all reached through the traits in this crate.

use std::path::PathBuf;
use std::sync::Arc;

pub mod traits;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod desktop;

#[cfg(any(target_os = "ios", target_os = "android"))]
pub mod stub;

/// Retrieve the capability bridge for the target operating system.
///
/// `data_dir` is where the desktop implementation keeps exported files and
/// key-value records; mobile implementations use platform storage instead.
pub fn platform_bridge(data_dir: impl Into<PathBuf>) -> Arc<dyn traits::PlatformBridge> {
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Arc::new(desktop::DesktopBridge::new(data_dir))
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        let _ = data_dir;
        Arc::new(stub::StubBridge)
    }
}

/// Retrieve the key-value storage capability alone.
///
/// The session store only needs this narrow slice of the bridge.
pub fn key_value_storage(data_dir: impl Into<PathBuf>) -> Arc<dyn traits::NativeKeyValueStorage> {
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Arc::new(desktop::DesktopBridge::new(data_dir))
    }
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        let _ = data_dir;
        Arc::new(stub::StubBridge)
    }
}
