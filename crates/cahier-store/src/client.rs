// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// REST client for the remote specification store.
//
// The store is a plain CRUD service: GET /api/specifications returns every
// stored record, POST /api/specifications persists a new one and responds
// with the copy carrying the assigned id. Any non-2xx response is a store
// failure; callers decide whether to surface it or fall back.

use std::time::Duration;

use async_trait::async_trait;
use cahier_core::error::{CahierError, Result};
use cahier_core::types::Specification;
use reqwest::Client;
use tracing::{debug, instrument};

const SPECIFICATIONS_PATH: &str = "/api/specifications";

/// Remote persistence for specification records.
#[async_trait]
pub trait SpecificationStore: Send + Sync {
    /// Persist a new record. The returned copy carries the assigned id.
    async fn create(&self, spec: &Specification) -> Result<Specification>;

    /// Fetch every stored record.
    async fn list_all(&self) -> Result<Vec<Specification>>;
}

/// `SpecificationStore` over HTTP.
#[derive(Clone)]
pub struct HttpSpecificationStore {
    client: Client,
    base_url: String,
}

impl HttpSpecificationStore {
    /// Build a client for the store at `base_url` (scheme + authority, with
    /// or without a trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CahierError::Store(format!("client init: {e}")))?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SPECIFICATIONS_PATH)
    }
}

#[async_trait]
impl SpecificationStore for HttpSpecificationStore {
    #[instrument(skip_all, fields(project = %spec.project_name))]
    async fn create(&self, spec: &Specification) -> Result<Specification> {
        let response = self
            .client
            .post(self.endpoint())
            .json(spec)
            .send()
            .await
            .map_err(|e| CahierError::Store(format!("create: {e}")))?;

        if !response.status().is_success() {
            return Err(CahierError::Store(format!(
                "create: server returned {}",
                response.status()
            )));
        }

        let created: Specification = response
            .json()
            .await
            .map_err(|e| CahierError::Store(format!("create: decode response: {e}")))?;

        debug!(id = ?created.id, "specification created");
        Ok(created)
    }

    #[instrument(skip_all)]
    async fn list_all(&self) -> Result<Vec<Specification>> {
        let response = self
            .client
            .get(self.endpoint())
            .send()
            .await
            .map_err(|e| CahierError::Store(format!("list: {e}")))?;

        if !response.status().is_success() {
            return Err(CahierError::Store(format!(
                "list: server returned {}",
                response.status()
            )));
        }

        let specs: Vec<Specification> = response
            .json()
            .await
            .map_err(|e| CahierError::Store(format!("list: decode response: {e}")))?;

        debug!(count = specs.len(), "specifications fetched");
        Ok(specs)
    }
}
