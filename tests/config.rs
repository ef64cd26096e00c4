//! Configuration precedence tests.
//!
//! There is exactly one loader and one precedence rule: an explicitly set
//! variable wins, otherwise the documented default applies.

use std::collections::HashMap;

use lychee_admin::config::Config;

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(move |key| vars.get(key).cloned())
}

#[test]
fn defaults_select_dev_endpoint() {
    let config = config_from(&[]);
    assert!(!config.is_production);
    assert_eq!(config.api_base(), "http://localhost:8081/api/v1");
    assert_eq!(config.addr(), "127.0.0.1:3001");
}

#[test]
fn production_flag_selects_production_endpoint() {
    let config = config_from(&[("IS_PRODUCTION", "true")]);
    assert_eq!(config.api_base(), "http://lalalycheee.vn/api/v1");

    let numeric = config_from(&[("IS_PRODUCTION", "1")]);
    assert!(numeric.is_production);

    let off = config_from(&[("IS_PRODUCTION", "no")]);
    assert!(!off.is_production);
}

#[test]
fn explicit_endpoints_override_defaults() {
    let config = config_from(&[
        ("IS_PRODUCTION", "true"),
        ("API_ENDPOINT_PRODUCTION", "https://api.example.com/v1"),
        ("API_ENDPOINT_DEV", "http://dev.local/v1"),
    ]);
    assert_eq!(config.api_base(), "https://api.example.com/v1");
    assert_eq!(config.api_endpoint_dev, "http://dev.local/v1");
}

#[test]
fn host_and_port_override() {
    let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "8080")]);
    assert_eq!(config.addr(), "0.0.0.0:8080");

    // Unparseable port falls back to the default.
    let bad_port = config_from(&[("PORT", "not-a-port")]);
    assert_eq!(bad_port.port, 3001);
}
