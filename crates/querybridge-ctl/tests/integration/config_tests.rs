/*
 *  Copyright 2026 Querybridge Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use querybridge_ctl::config::{ConfigError, ConfigLoader, Validate};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("querybridge.toml");

    fs::write(
        &config_path,
        r#"
[backend]
base_url = "https://backend.example.com"
api_token = "secret"
request_timeout_secs = 10

[poll]
max_attempts = 30
interval_ms = 1000
"#,
    )
    .expect("Failed to write config file");

    let loader = ConfigLoader::with_search_paths(vec![]);
    let config = loader
        .load_config_from_file(&config_path)
        .expect("Should load config");

    assert_eq!(config.backend.base_url, "https://backend.example.com");
    assert_eq!(config.backend.api_token.as_deref(), Some("secret"));
    assert_eq!(config.backend.request_timeout_secs, 10);
    assert_eq!(config.poll.max_attempts, 30);
    assert_eq!(config.poll.interval_ms, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("querybridge.toml");

    fs::write(
        &config_path,
        r#"
[backend]
base_url = "https://backend.example.com"
"#,
    )
    .expect("Failed to write config file");

    let loader = ConfigLoader::with_search_paths(vec![]);
    let config = loader
        .load_config_from_file(&config_path)
        .expect("Should load config");

    assert_eq!(config.backend.request_timeout_secs, 30);
    assert_eq!(config.poll.max_attempts, 60);
    assert_eq!(config.poll.interval_ms, 2000);
}

#[test]
fn test_env_var_substitution() {
    std::env::set_var("QB_TEST_TOKEN", "from-env");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("querybridge.toml");

    fs::write(
        &config_path,
        r#"
[backend]
base_url = "${QB_TEST_MISSING_URL:-https://fallback.example.com}"
api_token = "${QB_TEST_TOKEN}"
"#,
    )
    .expect("Failed to write config file");

    let loader = ConfigLoader::with_search_paths(vec![]);
    let config = loader
        .load_config_from_file(&config_path)
        .expect("Should load config");

    assert_eq!(config.backend.base_url, "https://fallback.example.com");
    assert_eq!(config.backend.api_token.as_deref(), Some("from-env"));
}

#[test]
fn test_required_env_var_missing_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("querybridge.toml");

    fs::write(
        &config_path,
        r#"
[backend]
api_token = "${QB_TEST_DEFINITELY_UNSET:?token is required}"
"#,
    )
    .expect("Failed to write config file");

    let loader = ConfigLoader::with_search_paths(vec![]);
    let result = loader.load_config_from_file(&config_path);

    assert!(matches!(
        result,
        Err(ConfigError::EnvSubstitutionError(message)) if message.contains("token is required")
    ));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let loader = ConfigLoader::with_search_paths(vec![]);
    let result = loader.load_config_from_file(std::path::Path::new("/nonexistent/qb.toml"));

    assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
}

#[test]
fn test_no_config_found_falls_back_to_defaults() {
    let loader = ConfigLoader::with_search_paths(vec![]);
    let config = loader.load_config(None).expect("Should fall back");

    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.poll.max_attempts, 60);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("querybridge.toml");

    fs::write(&config_path, "backend = not valid toml {").expect("Failed to write config file");

    let loader = ConfigLoader::with_search_paths(vec![]);
    let result = loader.load_config_from_file(&config_path);

    assert!(matches!(result, Err(ConfigError::TomlParseError(_))));
}
