// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — initialises the platform bridge, remote store,
// session store, and preview pipeline, and provides async-friendly methods
// for the embedding UI shell to call.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cahier_core::AppConfig;
use cahier_core::error::Result;
use cahier_session::guard::{self, Location, Redirect};
use cahier_session::store::{AuthBackend, SessionStore};
use cahier_store::{HttpSpecificationStore, SpecificationStore};
use tracing::info;

use super::data_dir;
use super::preview::PreviewService;

/// Shared application services handed to the UI shell.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct AppServices {
    preview: PreviewService,
    session: Arc<tokio::sync::Mutex<SessionStore>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// Loads the persisted config (falling back to defaults), builds the
    /// platform bridge and the HTTP store client, and constructs the session
    /// store around the injected auth backend.
    pub fn init(auth_backend: Arc<dyn AuthBackend>) -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();

        let bridge = cahier_bridge::platform_bridge(&dir);
        let store: Arc<dyn SpecificationStore> = Arc::new(HttpSpecificationStore::new(
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?);

        let storage = cahier_bridge::key_value_storage(&dir);
        let session = SessionStore::new(storage, auth_backend);
        let preview = PreviewService::new(store, bridge);

        info!("app services initialised");

        Ok(Self {
            preview,
            session: Arc::new(tokio::sync::Mutex::new(session)),
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    // -- Navigation / session ------------------------------------------------

    /// Restore the persisted session and run the first guard pass.
    ///
    /// The guard never fires before the restore resolves, so the shell calls
    /// this once at startup and applies the returned redirect, if any.
    pub async fn restore_session(&self, location: &Location) -> Option<Redirect> {
        let mut session = self.session.lock().await;
        session.load();
        guard::evaluate(session.state(), location)
    }

    /// Re-evaluate the guard after a location or auth-state change.
    pub async fn evaluate_guard(&self, location: &Location) -> Option<Redirect> {
        let session = self.session.lock().await;
        guard::evaluate(session.state(), location)
    }

    /// The session store. Lock it briefly; never across a UI await.
    pub fn session(&self) -> Arc<tokio::sync::Mutex<SessionStore>> {
        Arc::clone(&self.session)
    }

    // -- Document pipeline ---------------------------------------------------

    /// The document pipeline behind the preview screen.
    pub fn preview(&self) -> &PreviewService {
        &self.preview
    }

    // -- Config persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            api_base_url: "https://spec.example.com".into(),
            ..AppConfig::default()
        };

        persist_config(dir.path(), &config).expect("persist");
        let loaded = load_config(dir.path()).expect("load");
        assert_eq!(loaded.api_base_url, "https://spec.example.com");
        assert_eq!(loaded.request_timeout_secs, config.request_timeout_secs);
    }

    #[test]
    fn corrupt_config_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "{oops").expect("write");
        assert!(load_config(dir.path()).is_none());
    }

    #[test]
    fn absent_config_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());
    }
}
