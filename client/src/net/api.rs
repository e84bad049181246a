//! REST API helpers for communicating with the server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! to an empty panel without crashing the app.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{ApiInfo, HEALTH_PATH, HealthCheck, INFO_PATH};
use serde::de::DeserializeOwned;

/// Why a fetch produced no record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("api unavailable outside the browser")]
    Unavailable,
}

/// Fetch server metadata from `/api/info`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status, or a body that
/// does not decode as [`ApiInfo`].
pub async fn fetch_api_info() -> Result<ApiInfo, ApiError> {
    get_json(INFO_PATH).await
}

/// Fetch a liveness report from `/api/health`.
///
/// # Errors
///
/// Returns an [`ApiError`] on network failure, non-2xx status, or a body that
/// does not decode as [`HealthCheck`].
pub async fn fetch_health() -> Result<HealthCheck, ApiError> {
    get_json(HEALTH_PATH).await
}

/// Classify a response status; only 2xx proceeds to decoding.
#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
