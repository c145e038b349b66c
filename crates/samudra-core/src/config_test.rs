use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "SAMUDRA_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert_eq!(cfg.gallery_page_size, 6);
    assert_eq!(cfg.contact_delay_ms, 1000);
    assert_eq!(cfg.custom_order_delay_ms, 1500);
    assert_eq!(cfg.payment_delay_ms, 2000);
    assert_eq!(cfg.rate_limit_max_requests, 120);
    assert_eq!(cfg.rate_limit_window_secs, 60);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_BIND_ADDR"),
        "expected InvalidEnvVar(SAMUDRA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_env() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_ENV"),
        "expected InvalidEnvVar(SAMUDRA_ENV), got: {result:?}"
    );
}

#[test]
fn catalog_path_override() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_CATALOG_PATH", "/etc/samudra/catalog.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path.to_str(), Some("/etc/samudra/catalog.yaml"));
}

#[test]
fn gallery_page_size_override() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_GALLERY_PAGE_SIZE", "9");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gallery_page_size, 9);
}

#[test]
fn gallery_page_size_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_GALLERY_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_GALLERY_PAGE_SIZE"),
        "expected InvalidEnvVar(SAMUDRA_GALLERY_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn gallery_page_size_invalid() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_GALLERY_PAGE_SIZE", "six");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_GALLERY_PAGE_SIZE"),
        "expected InvalidEnvVar(SAMUDRA_GALLERY_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn submission_delays_override() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_CONTACT_DELAY_MS", "0");
    map.insert("SAMUDRA_CUSTOM_ORDER_DELAY_MS", "10");
    map.insert("SAMUDRA_PAYMENT_DELAY_MS", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.contact_delay().as_millis(), 0);
    assert_eq!(cfg.custom_order_delay().as_millis(), 10);
    assert_eq!(cfg.payment_delay().as_millis(), 20);
}

#[test]
fn payment_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_PAYMENT_DELAY_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_PAYMENT_DELAY_MS"),
        "expected InvalidEnvVar(SAMUDRA_PAYMENT_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn rate_limit_override() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_RATE_LIMIT_MAX_REQUESTS", "10");
    map.insert("SAMUDRA_RATE_LIMIT_WINDOW_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_max_requests, 10);
    assert_eq!(cfg.rate_limit_window().as_secs(), 30);
}

#[test]
fn rate_limit_zero_requests_is_rejected() {
    let mut map = HashMap::new();
    map.insert("SAMUDRA_RATE_LIMIT_MAX_REQUESTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SAMUDRA_RATE_LIMIT_MAX_REQUESTS"),
        "expected InvalidEnvVar(SAMUDRA_RATE_LIMIT_MAX_REQUESTS), got: {result:?}"
    );
}
