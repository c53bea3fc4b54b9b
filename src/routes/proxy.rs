//! Collection proxy: `GET /api/{resource}` → `GET {BACKEND_URL}/{resource}`.
//!
//! Only the five known collection segments are forwarded. The upstream
//! status code and body pass through untouched, so the client applies the
//! same success/array checks it would against the backend directly.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("backend request failed: {0}")]
    Upstream(String),
    #[error("backend response could not be read: {0}")]
    UpstreamBody(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Backend URL for a collection segment. `base` carries no trailing slash.
pub fn upstream_url(base: &str, segment: &str) -> String {
    format!("{base}/{segment}")
}

/// Forward one collection read to the backend.
///
/// # Errors
///
/// `UnknownResource` when `resource` is not a configured collection (the
/// backend is not contacted); `Upstream`/`UpstreamBody` when the backend is
/// unreachable or the body cannot be read.
pub async fn list_collection(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Response, ProxyError> {
    if client::resources::by_path_segment(&resource).is_none() {
        return Err(ProxyError::UnknownResource(resource));
    }

    let url = upstream_url(&state.backend_url, &resource);
    let resp = state.http.get(&url).send().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "backend request failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let body: Bytes = resp.bytes().await.map_err(|e| {
        tracing::warn!(%url, error = %e, "backend body read failed");
        ProxyError::UpstreamBody(e.to_string())
    })?;

    if status.is_success() {
        tracing::debug!(%resource, bytes = body.len(), "proxied collection");
    } else {
        tracing::warn!(%resource, status = status.as_u16(), "backend returned error status");
    }

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;
