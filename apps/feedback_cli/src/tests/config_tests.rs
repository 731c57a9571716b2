use super::{apply_env, apply_file, load_settings, validate_server_url, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "server_url = \"http://analysis.internal:8080\"\n").expect("apply");

    assert_eq!(settings.server_url, "http://analysis.internal:8080");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "server_url = [").is_err());
}

#[test]
fn app_prefixed_env_wins_over_plain_name() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("FEEDBACK_SERVER_URL", "http://plain:1"),
        ("APP__SERVER_URL", "http://prefixed:2"),
        ("FEEDBACK_LOG", "debug"),
    ]);
    let mut settings = Settings::default();
    apply_env(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://prefixed:2");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn explicit_config_path_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("feedback_missing_{suffix}.toml"));

    let err = load_settings(Some(&missing)).expect_err("must fail");
    assert!(err.to_string().contains("failed to read"), "{err}");
}

#[test]
fn explicit_config_path_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("feedback_cli_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("feedback.toml");
    fs::write(&path, "log_filter = \"warn\"\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    if env::var("FEEDBACK_LOG").is_err() {
        assert_eq!(settings.log_filter, "warn");
    }

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn server_url_must_be_http() {
    assert!(validate_server_url("http://127.0.0.1:5000").is_ok());
    assert!(validate_server_url(" https://example.test/emotion ").is_ok());
    assert!(validate_server_url("ftp://example.test").is_err());
    assert!(validate_server_url("127.0.0.1:5000").is_err());
}
