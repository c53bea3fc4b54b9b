//! REST collection fetch for resource list views.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns [`FetchError::Unavailable`]; list views only
//! fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, status, body, JSON, shape) collapses into a
//! single [`FetchError`] whose `Display` text is what the error view shows.
//! A successful response that is not a JSON array is an error too.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

/// Path prefix under which the host proxies backend collections.
pub const API_PREFIX: &str = "/api";

/// Errors surfaced by [`fetch_collection`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("invalid JSON response: {0}")]
    Parse(String),
    #[error("expected a JSON array, got {0}")]
    NotAnArray(&'static str),
    #[error("unexpected record shape: {0}")]
    Shape(String),
    #[error("not available on server")]
    Unavailable,
}

/// Browser URL for a resource endpoint such as `/generos`.
#[must_use]
pub fn collection_url(endpoint: &str) -> String {
    format!("{API_PREFIX}{endpoint}")
}

/// Parse a response body into a typed collection.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] for malformed JSON, [`FetchError::NotAnArray`]
/// when the top-level value is not an array, and [`FetchError::Shape`] when an
/// element does not match `R`.
pub fn parse_collection<R: DeserializeOwned>(body: &str) -> Result<Vec<R>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    if !value.is_array() {
        return Err(FetchError::NotAnArray(json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| FetchError::Shape(e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Fetch a whole resource collection with a single `GET`.
///
/// # Errors
///
/// Returns a [`FetchError`] for any transport, status, or body failure.
pub async fn fetch_collection<R: DeserializeOwned>(endpoint: &str) -> Result<Vec<R>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_url(endpoint);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Body(e.to_string()))?;
        parse_collection(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(FetchError::Unavailable)
    }
}
