use super::*;

fn sample_info() -> ApiInfo {
    serde_json::from_str(
        r#"{"name":"spec-kit-project-test","version":"0.0.0","description":"React-free demo","environment":"test"}"#,
    )
    .unwrap()
}

fn sample_health() -> HealthCheck {
    serde_json::from_str(r#"{"status":"ok","message":"Server is running!","timestamp":"2024-03-05T07:08:09.042Z"}"#)
        .unwrap()
}

#[test]
fn api_state_starts_empty() {
    let state = ApiState::default();
    assert!(state.info.is_none());
    assert!(state.health.is_none());
    assert!(!state.info_loading);
}

#[test]
fn info_fetch_success_stores_record_and_clears_loading() {
    let mut state = ApiState::default();
    state.begin_info_fetch();
    assert!(state.info_loading);

    state.finish_info_fetch(Ok(sample_info()));
    assert!(!state.info_loading);
    assert_eq!(state.info, Some(sample_info()));
}

#[test]
fn info_fetch_failure_leaves_panel_empty_and_clears_loading() {
    let mut state = ApiState::default();
    state.begin_info_fetch();
    state.finish_info_fetch(Err(ApiError::Network("offline".into())));
    assert!(!state.info_loading);
    assert!(state.info.is_none());
}

#[test]
fn info_refresh_failure_keeps_previous_record() {
    let mut state = ApiState::default();
    state.finish_info_fetch(Ok(sample_info()));
    state.begin_info_fetch();
    state.finish_info_fetch(Err(ApiError::Status(500)));
    assert_eq!(state.info, Some(sample_info()));
}

#[test]
fn health_fetch_does_not_touch_loading_flag() {
    let mut state = ApiState::default();
    state.begin_info_fetch();
    state.finish_health_fetch(Ok(sample_health()));
    assert!(state.info_loading);
    assert_eq!(state.health, Some(sample_health()));
}

#[test]
fn health_fetch_failure_leaves_panel_empty() {
    let mut state = ApiState::default();
    state.finish_health_fetch(Err(ApiError::Decode("eof".into())));
    assert!(state.health.is_none());
}

#[test]
fn info_rows_show_all_fields_verbatim() {
    let rows = info_rows(&sample_info());
    assert_eq!(
        rows,
        [
            ("Name", "spec-kit-project-test".to_owned()),
            ("Version", "0.0.0".to_owned()),
            ("Description", "React-free demo".to_owned()),
            ("Environment", "test".to_owned()),
        ]
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn health_rows_show_status_and_readable_timestamp() {
    let rows = health_rows(&sample_health());
    assert_eq!(rows[0], ("Status", "ok".to_owned()));
    assert_eq!(rows[1], ("Message", "Server is running!".to_owned()));
    assert_eq!(rows[2], ("Timestamp", "2024-03-05 07:08:09 UTC".to_owned()));
}
