//! Records fetched from `/api/info` and `/api/health`.
//!
//! DESIGN
//! ======
//! Each record is replaced only by a successful fetch. A failure is logged
//! and leaves the previous value (initially `None`) in place, so the
//! dependent panel simply stays as it was. Only the info fetch drives a
//! loading flag.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{ApiInfo, HealthCheck};

use crate::net::api::ApiError;
use crate::util::timestamp::display_timestamp;

/// Most recent API responses held by the UI.
#[derive(Clone, Debug, Default)]
pub struct ApiState {
    pub info: Option<ApiInfo>,
    pub health: Option<HealthCheck>,
    pub info_loading: bool,
}

impl ApiState {
    pub fn begin_info_fetch(&mut self) {
        self.info_loading = true;
    }

    pub fn finish_info_fetch(&mut self, result: Result<ApiInfo, ApiError>) {
        self.info_loading = false;
        match result {
            Ok(info) => self.info = Some(info),
            Err(e) => leptos::logging::error!("Failed to fetch API info: {e}"),
        }
    }

    pub fn finish_health_fetch(&mut self, result: Result<HealthCheck, ApiError>) {
        match result {
            Ok(health) => self.health = Some(health),
            Err(e) => leptos::logging::error!("Failed to fetch health check: {e}"),
        }
    }
}

/// Labelled rows for the API information panel. Values are shown verbatim.
#[must_use]
pub fn info_rows(info: &ApiInfo) -> [(&'static str, String); 4] {
    [
        ("Name", info.name.clone()),
        ("Version", info.version.clone()),
        ("Description", info.description.clone()),
        ("Environment", info.environment.clone()),
    ]
}

/// Labelled rows for the server health panel.
#[must_use]
pub fn health_rows(health: &HealthCheck) -> [(&'static str, String); 3] {
    [
        ("Status", health.status.clone()),
        ("Message", health.message.clone()),
        ("Timestamp", display_timestamp(&health.timestamp)),
    ]
}
