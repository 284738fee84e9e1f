//! Building a `DevStore` from its data sources.
//!
//! Two sources are supported:
//! - the `/devs` HTTP endpoint (`DevStore::fetch`), fetched once at startup
//! - a local JSON file of the same shape (`DevStore::load_from_file`)
//!
//! Neither retries; a failed load is reported to the caller, which decides
//! whether to carry on with `DevStore::new()`.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use std::time::Instant;

/// Default location of the developer endpoint
pub const DEFAULT_DEVS_URL: &str = "http://localhost:3001/devs";

impl DevStore {
    /// Wrap already-built records
    pub fn from_records(records: Vec<DeveloperRecord>) -> Self {
        Self { records }
    }

    /// Build a store from a JSON array held in memory
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        Ok(Self::from_records(parser::parse_devs(json, origin)?))
    }

    /// Load the developer list from a local JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let origin = path.display().to_string();

        let json = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: origin.clone(),
            source,
        })?;
        let store = Self::from_json(&json, &origin)?;

        tracing::info!(
            "Loaded {} developers from {} in {:?}",
            store.len(),
            origin,
            start.elapsed()
        );
        Ok(store)
    }

    /// Fetch the developer list from the HTTP endpoint.
    ///
    /// Steps:
    /// 1. GET `url`
    /// 2. Reject non-2xx responses
    /// 3. Parse the body and compute derived fields
    pub async fn fetch(url: &str) -> Result<Self> {
        let start = Instant::now();
        tracing::debug!("Fetching developers from {}", url);

        let http_err = |source| DataLoadError::Http {
            url: url.to_string(),
            source,
        };

        let response = reqwest::get(url).await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataLoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(http_err)?;
        let store = Self::from_json(&body, url)?;

        tracing::info!(
            "Fetched {} developers from {} in {:?}",
            store.len(),
            url,
            start.elapsed()
        );
        Ok(store)
    }
}
