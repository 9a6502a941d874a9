use std::collections::HashMap;

use super::*;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.users_file.is_none());
    assert!(cfg.static_dir.is_none());
    assert!(cfg.cors_origin.is_none());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
}

#[test]
fn explicit_values_are_used() {
    let cfg = from_pairs(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("DATAENTRY_USERS_FILE", "/etc/dataentry/users.yaml"),
        ("DATAENTRY_STATIC_DIR", "dist"),
        ("CORS_ALLOW_ORIGIN", "http://localhost:5173"),
    ])
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.users_file, Some(PathBuf::from("/etc/dataentry/users.yaml")));
    assert_eq!(cfg.static_dir, Some(PathBuf::from("dist")));
    assert_eq!(cfg.cors_origin.as_deref(), Some("http://localhost:5173"));
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(from_pairs(&[("PORT", "eighty")]), Err(ConfigError::InvalidPort("eighty".into())));
    assert_eq!(from_pairs(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = from_pairs(&[("HOST", "  "), ("PORT", ""), ("DATAENTRY_USERS_FILE", "")]).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.users_file.is_none());
}

#[test]
fn wildcard_cors_origin_means_any() {
    let cfg = from_pairs(&[("CORS_ALLOW_ORIGIN", "*")]).unwrap();
    assert!(cfg.cors_origin.is_none());
}
