use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, 3001);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.info.name, DEFAULT_APP_NAME);
    assert_eq!(cfg.info.version, "0.0.0");
    assert_eq!(cfg.info.description, DEFAULT_APP_DESCRIPTION);
    assert_eq!(cfg.info.environment, "development");
    assert!(cfg.dist_dir.ends_with("client/dist"));
}

#[test]
fn from_lookup_reads_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_lookup_echoes_node_env() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("NODE_ENV", "production")])).unwrap();
    assert_eq!(cfg.info.environment, "production");
}

#[test]
fn from_lookup_prefers_app_env_over_node_env() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("NODE_ENV", "production"), ("APP_ENV", "staging")])).unwrap();
    assert_eq!(cfg.info.environment, "staging");
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("NODE_ENV", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.info.environment, DEFAULT_ENVIRONMENT);
}

#[test]
fn from_lookup_overrides_info_fields_and_dist_dir() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("APP_NAME", "demo"),
        ("APP_VERSION", "1.2.3"),
        ("APP_DESCRIPTION", "a demo"),
        ("DIST_DIR", "/srv/www"),
    ]))
    .unwrap();
    assert_eq!(cfg.info.name, "demo");
    assert_eq!(cfg.info.version, "1.2.3");
    assert_eq!(cfg.info.description, "a demo");
    assert_eq!(cfg.dist_dir, PathBuf::from("/srv/www"));
    assert_eq!(cfg.index_html(), PathBuf::from("/srv/www/index.html"));
}
