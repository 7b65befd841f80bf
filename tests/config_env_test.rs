//! Config environment variable tests
//!
//! These tests verify that Config::from_env() reads and applies environment
//! variable overrides. Config::from_env() also loads a .env file via dotenvy,
//! so each test sets the variables it depends on and clears them afterwards.
//!
//! Tests use #[serial] to prevent races on the shared process environment.

use misinfo_dashboard::config::{Config, LogFormat};
use serial_test::serial;
use std::env;

const VARS: [&str; 7] = [
    "ANALYSIS_API_BASE_URL",
    "REQUEST_TIMEOUT_MS",
    "MAX_TEXT_CHARS",
    "MAX_IMAGE_BYTES",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "THEME_PRIMARY",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.request.timeout_ms, 30000);
    assert_eq!(config.limits.max_text_chars, 5000);
    assert_eq!(config.limits.max_image_bytes, 16 * 1024 * 1024);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.theme.primary, "#667eea");
}

#[test]
#[serial]
fn test_config_from_env_custom_base_url() {
    clear_env();
    env::set_var("ANALYSIS_API_BASE_URL", "https://analysis.example.org");

    let config = Config::from_env().unwrap();
    assert_eq!(config.backend.base_url, "https://analysis.example.org");

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_rejects_invalid_base_url() {
    clear_env();
    env::set_var("ANALYSIS_API_BASE_URL", "not a url");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("ANALYSIS_API_BASE_URL"));

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_custom_limits() {
    clear_env();
    env::set_var("REQUEST_TIMEOUT_MS", "1500");
    env::set_var("MAX_TEXT_CHARS", "280");
    env::set_var("MAX_IMAGE_BYTES", "1048576");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 1500);
    assert_eq!(config.limits.max_text_chars, 280);
    assert_eq!(config.limits.max_image_bytes, 1_048_576);

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_unparseable_numbers_fall_back() {
    clear_env();
    env::set_var("REQUEST_TIMEOUT_MS", "soon");
    env::set_var("MAX_TEXT_CHARS", "-3");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 30000);
    assert_eq!(config.limits.max_text_chars, 5000);

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_json_log_format() {
    clear_env();
    env::set_var("LOG_FORMAT", "JSON");
    env::set_var("LOG_LEVEL", "debug");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "debug");

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_theme_primary() {
    clear_env();
    env::set_var("THEME_PRIMARY", "  #123456 ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.theme.primary, "#123456");
    assert_eq!(config.theme.danger, "#dc3545");

    clear_env();
}
