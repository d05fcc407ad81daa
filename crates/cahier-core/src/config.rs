// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote specification store.
    pub api_base_url: String,
    /// Seconds before a remote store request is abandoned.
    pub request_timeout_secs: u64,
    /// Whether the stored-specification list is fetched on screen entry.
    pub fetch_on_entry: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
            request_timeout_secs: 30,
            fetch_on_entry: true,
        }
    }
}
