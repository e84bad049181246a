use super::*;

#[test]
fn health_ok_uses_fixed_status_and_message() {
    let health = HealthCheck::ok("2025-01-01T00:00:00.000Z");
    assert_eq!(health.status, "ok");
    assert_eq!(health.message, "Server is running!");
    assert_eq!(health.timestamp, "2025-01-01T00:00:00.000Z");
    assert!(health.is_ok());
}

#[test]
fn health_is_ok_rejects_other_statuses() {
    let health = HealthCheck {
        status: "degraded".to_owned(),
        message: String::new(),
        timestamp: String::new(),
    };
    assert!(!health.is_ok());
}

#[test]
fn api_info_serializes_with_contract_field_names() {
    let info = ApiInfo {
        name: "spec-kit-project-test".to_owned(),
        version: "0.0.0".to_owned(),
        description: "demo".to_owned(),
        environment: "test".to_owned(),
    };
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "spec-kit-project-test",
            "version": "0.0.0",
            "description": "demo",
            "environment": "test"
        })
    );
}

#[test]
fn health_check_parses_node_style_payload() {
    let raw = r#"{"status":"ok","message":"Server is running!","timestamp":"2024-05-06T07:08:09.123Z"}"#;
    let health: HealthCheck = serde_json::from_str(raw).unwrap();
    assert!(health.is_ok());
    assert_eq!(health.timestamp, "2024-05-06T07:08:09.123Z");
}

#[test]
fn health_check_rejects_missing_fields() {
    let raw = r#"{"status":"ok"}"#;
    assert!(serde_json::from_str::<HealthCheck>(raw).is_err());
}

#[test]
fn api_paths_share_prefix() {
    assert!(HEALTH_PATH.starts_with(API_PREFIX));
    assert!(INFO_PATH.starts_with(API_PREFIX));
}
