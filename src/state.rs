//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend base URL and one pooled HTTP client reused by every
//! proxied collection request.

use std::sync::Arc;

use crate::config::DashboardConfig;

#[derive(Clone)]
pub struct AppState {
    pub backend_url: Arc<str>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &DashboardConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { backend_url: Arc::from(config.backend_url.as_str()), http })
    }
}
