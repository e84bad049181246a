//! JSON endpoints under `/api`.
//!
//! Both endpoints are read-only and infallible: they take no input and
//! always answer 200. Anything else under `/api` is a JSON 404 so it never
//! falls through to the UI entry document.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::Json;
use contract::{ApiInfo, HealthCheck};
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::state::AppState;

/// `GET /api/health` — liveness report stamped with the current time.
pub async fn health() -> Json<HealthCheck> {
    Json(HealthCheck::ok(iso_timestamp(OffsetDateTime::now_utc())))
}

/// `GET /api/info` — static metadata from configuration.
pub async fn info(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(state.config.info.clone())
}

/// Fallback for unknown `/api/*` paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    tracing::debug!(path = %uri.path(), "unknown api route");
    (StatusCode::NOT_FOUND, Json(json!({ "error": format!("no route for {}", uri.path()) })))
}

/// Format a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ` (millisecond precision).
pub(crate) fn iso_timestamp(now: OffsetDateTime) -> String {
    let now = now.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond(),
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
