use recordings_config::{ConfigError, DEFAULT_MAX_CONNECTIONS, DatabaseConfig};
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn reads_credentials_with_fixed_defaults() {
    let config =
        DatabaseConfig::from_lookup(lookup_from(&[("DBUSER", "alice"), ("DBPASS", "s3/cr?t#")]))
            .expect("config");
    assert_eq!(config.user, "alice");
    assert_eq!(config.password, "s3/cr?t#");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5432);
    assert_eq!(config.database, "recordings");
    assert_eq!(config.ssl_mode, "disable");
    assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    assert!(config.url_override.is_none());
}

#[test]
fn missing_credentials_are_empty() {
    let config = DatabaseConfig::from_lookup(lookup_from(&[])).expect("config");
    assert!(config.user.is_empty());
    assert!(config.password.is_empty());
}

#[test]
fn url_override_wins() {
    let config = DatabaseConfig::from_lookup(lookup_from(&[
        ("DBUSER", "alice"),
        ("RECORDINGS_DATABASE_URL", "postgres://bob:pw@db:6543/other"),
    ]))
    .expect("config");
    assert_eq!(
        config.url_override.as_deref(),
        Some("postgres://bob:pw@db:6543/other")
    );
}

#[test]
fn rejects_invalid_max_connections() {
    for raw in ["zero", "0", "-3"] {
        let err = DatabaseConfig::from_lookup(lookup_from(&[(
            "RECORDINGS_DB_MAX_CONNECTIONS",
            raw,
        )]))
        .expect_err("invalid");
        assert!(matches!(
            err,
            ConfigError::Invalid(ref key, _) if key == "RECORDINGS_DB_MAX_CONNECTIONS"
        ));
    }

    let config =
        DatabaseConfig::from_lookup(lookup_from(&[("RECORDINGS_DB_MAX_CONNECTIONS", "16")]))
            .expect("config");
    assert_eq!(config.max_connections, 16);
}

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("DBUSER", "env-user");
        std::env::set_var("DBPASS", "env-pass");
    }

    let config = DatabaseConfig::from_env().expect("config");
    assert_eq!(config.user, "env-user");
    assert_eq!(config.password, "env-pass");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 5432);
    assert_eq!(config.database, "recordings");
}
