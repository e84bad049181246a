use std::path::Path;

use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

use super::*;
use crate::state::test_helpers::test_app_state;

fn instant(year: i32, month: Month, day: u8, hms: (u8, u8, u8), milli: u16) -> OffsetDateTime {
    let date = Date::from_calendar_date(year, month, day).unwrap();
    let time = Time::from_hms_milli(hms.0, hms.1, hms.2, milli).unwrap();
    PrimitiveDateTime::new(date, time).assume_utc()
}

#[test]
fn iso_timestamp_pads_and_keeps_millis() {
    let ts = iso_timestamp(instant(2024, Month::March, 5, (7, 8, 9), 42));
    assert_eq!(ts, "2024-03-05T07:08:09.042Z");
}

#[test]
fn iso_timestamp_normalizes_offset_to_utc() {
    let local = instant(2024, Month::December, 31, (23, 30, 0), 0).to_offset(UtcOffset::from_hms(2, 0, 0).unwrap());
    assert_eq!(iso_timestamp(local), "2024-12-31T23:30:00.000Z");
}

#[tokio::test]
async fn health_reports_ok_with_fresh_timestamp() {
    let Json(body) = health().await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.message, "Server is running!");
    assert!(body.timestamp.ends_with('Z'));
    assert_eq!(body.timestamp.len(), "2024-03-05T07:08:09.042Z".len());
}

#[tokio::test]
async fn info_echoes_configured_values() {
    let state = test_app_state(Path::new("/nonexistent"));
    let Json(body) = info(State(state)).await;
    assert_eq!(body.name, "spec-kit-project-test");
    assert_eq!(body.version, "0.0.0");
    assert_eq!(body.description, "test");
    assert_eq!(body.environment, "test");
}

#[tokio::test]
async fn not_found_names_the_requested_path() {
    let uri: axum::http::Uri = "/api/missing".parse().unwrap();
    let (status, Json(body)) = not_found(OriginalUri(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no route for /api/missing");
}
