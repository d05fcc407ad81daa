// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Cahier.

use thiserror::Error;

/// Top-level error type for all Cahier operations.
#[derive(Debug, Error)]
pub enum CahierError {
    // -- Remote store --
    #[error("specification store request failed: {0}")]
    Store(String),

    // -- Document errors --
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("document export failed: {0}")]
    Export(String),

    // -- Session --
    #[error("session storage failed: {0}")]
    SessionStorage(String),

    #[error("registration failed: {0}")]
    Registration(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CahierError>;
