//! Shared JSON records for the `/api` endpoints.
//!
//! This crate owns the wire representation used by `server`, `client` and
//! `cli`. Field names are part of the public HTTP contract and must not be
//! renamed.

use serde::{Deserialize, Serialize};

/// Prefix reserved for JSON endpoints. Paths under it never fall through to
/// the UI entry document.
pub const API_PREFIX: &str = "/api";

/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Static server metadata endpoint.
pub const INFO_PATH: &str = "/api/info";

/// The only status value the health endpoint reports.
pub const STATUS_OK: &str = "ok";

/// Message attached to every health response.
pub const HEALTH_MESSAGE: &str = "Server is running!";

/// Static metadata about the running server process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
}

/// Liveness report, generated fresh per request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    /// ISO-8601 UTC instant, e.g. `2025-01-01T12:00:00.000Z`.
    pub timestamp: String,
}

impl HealthCheck {
    /// Build an `ok` report stamped with `timestamp`.
    #[must_use]
    pub fn ok(timestamp: impl Into<String>) -> Self {
        Self { status: STATUS_OK.to_owned(), message: HEALTH_MESSAGE.to_owned(), timestamp: timestamp.into() }
    }

    /// Whether the server reported itself healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
