use std::time::Duration;

use crate::config::{
    Config, DEFAULT_PORT, SHUTDOWN_GRACE_SECS, UpstreamConfig, parse_config_file, parse_port,
};

#[test]
fn test_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("")).unwrap(), DEFAULT_PORT);
}

#[test]
fn test_port_from_env_value() {
    assert_eq!(parse_port(Some("5000")).unwrap(), 5000);
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn test_invalid_port() {
    assert!(parse_port(Some("http")).is_err());
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn test_empty_config_file() {
    assert_eq!(parse_config_file("").unwrap(), UpstreamConfig::default());
}

#[test]
fn test_partial_upstream_table() {
    let upstream = parse_config_file(
        r#"
        [upstream]
        pokeapi_url = "http://localhost:8000/api/v2"
        timeout_secs = 2
        "#,
    )
    .unwrap();

    assert_eq!(upstream.pokeapi_url, "http://localhost:8000/api/v2");
    assert_eq!(
        upstream.funtranslations_url,
        UpstreamConfig::default().funtranslations_url
    );
    assert_eq!(upstream.timeout(), Duration::from_secs(2));
}

#[test]
fn test_malformed_config_file() {
    assert!(parse_config_file("[upstream\npokeapi_url = 1").is_err());
    assert!(parse_config_file("[upstream]\ntimeout_secs = \"ten\"").is_err());
}

#[test]
fn test_rocket_figment() {
    let config = Config {
        port: 5000,
        upstream: UpstreamConfig::default(),
    };

    let rocket_config: rocket::Config = config.figment().extract().unwrap();

    assert_eq!(rocket_config.port, 5000);
    assert_eq!(rocket_config.address.to_string(), "0.0.0.0");
    assert!(rocket_config.shutdown.ctrlc);
    assert_eq!(rocket_config.shutdown.grace, SHUTDOWN_GRACE_SECS);
    assert_eq!(rocket_config.shutdown.mercy, SHUTDOWN_GRACE_SECS);
}
