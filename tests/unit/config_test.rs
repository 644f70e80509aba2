//! Tests for configuration loading

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use cardwarden::config::{AppConfig, ConfigError, DEFAULT_TIMEOUT_SECS};
use cardwarden::core::ports::StorageBackend;
use tempfile::TempDir;

const FULL: &str = r##"
[server]
bind = "127.0.0.1:8080"
path = "/hooks"

[store]
backend = "file"
path = "/tmp/tracked.json"

[trello]
api_key = "file-key"

[slack]
webhook_url = "https://hooks.slack.com/services/T/B/X"

[scopes.B1]
base_rules = [{ rule = "title_min_length", min = 12 }, { rule = "has_labels" }]
defaults = { notification_target = "#cards" }

[scopes.B1.list_rules]
Done = [{ rule = "checklists_complete" }]
"In Review" = [{ rule = "has_members", message = "assign someone" }]
"##;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_defaults() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:3000");
    assert_eq!(config.server.path, "/webhooks/trello");
    assert_eq!(config.store_backend().unwrap(), StorageBackend::Memory);
    assert!(config.scopes.is_empty());
}

#[test]
fn test_full_config() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:8080");
    assert_eq!(config.store_backend().unwrap(), StorageBackend::File);
    assert_eq!(config.store_path(), PathBuf::from("/tmp/tracked.json"));

    let scope = &config.scopes["B1"];
    assert_eq!(scope.base_rules.len(), 2);
    assert_eq!(scope.base_rules[0].u64_param("min"), Some(12));
    assert_eq!(scope.notification_target().as_str(), "#cards");
    assert!(!scope.evaluate_on_create);
}

#[test]
fn test_list_rule_keys_are_lowercased() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    let scope = &config.scopes["B1"];

    assert!(scope.list_rules.contains_key("done"));
    assert!(scope.list_rules.contains_key("in review"));
    assert_eq!(scope.rules_for_list("Done")[0].rule, "checklists_complete");
    assert_eq!(scope.rules_for_list("IN REVIEW")[0].str_param("message"), Some("assign someone"));
}

#[test]
fn test_invalid_toml() {
    let err = AppConfig::from_toml_str("[scopes.B1]\nbase_rules = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_backend() {
    let config = AppConfig::from_toml_str("[store]\nbackend = \"redis\"").unwrap();
    let err = config.store_backend().unwrap_err();
    assert!(err.to_string().contains("Unknown backend"));
}

// =============================================================================
// CREDENTIALS
// =============================================================================

#[test]
fn test_credentials_prefer_file_then_env() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    let creds = config
        .trello_credentials(env(&[("TRELLO_KEY", "env-key"), ("TRELLO_TOKEN", "env-token")]))
        .unwrap();
    assert_eq!(creds.api_key, "file-key");
    assert_eq!(creds.token, "env-token");
}

#[test]
fn test_missing_credential() {
    let config = AppConfig::default();
    let err = config.trello_credentials(env(&[("TRELLO_KEY", "k")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredential("TRELLO_TOKEN")));
}

#[test]
fn test_slack_webhook_falls_back_to_env() {
    let config = AppConfig::default();
    assert_eq!(config.slack_webhook(env(&[])), None);
    assert_eq!(
        config.slack_webhook(env(&[("SLACK_WEBHOOK_URL", "https://example.test/hook")])),
        Some("https://example.test/hook".to_string())
    );
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_resolve_path_precedence() {
    let explicit = PathBuf::from("/etc/cardwarden.toml");
    let lookup = env(&[("CARDWARDEN_CONFIG", "/opt/cw.toml")]);

    assert_eq!(AppConfig::resolve_path(Some(explicit.clone()), &lookup), explicit);
    assert_eq!(AppConfig::resolve_path(None, &lookup), PathBuf::from("/opt/cw.toml"));
    assert!(AppConfig::resolve_path(None, env(&[])).ends_with(".cardwarden/config.toml"));
}

#[test]
fn test_load_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, FULL).unwrap();

    let config = AppConfig::load(&path).unwrap();
    assert!(config.scopes.contains_key("B1"));
}

#[test]
fn test_env_named_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.toml");
    let missing = missing.to_str().unwrap();

    let err = AppConfig::load_or_default(None, env(&[("CARDWARDEN_CONFIG", missing)])).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));

    let err = AppConfig::load_or_default(Some(PathBuf::from(missing)), env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_env_named_config_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cw.toml");
    std::fs::write(&path, FULL).unwrap();

    let config =
        AppConfig::load_or_default(None, env(&[("CARDWARDEN_CONFIG", path.to_str().unwrap())]))
            .unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:8080");
}

#[test]
fn test_gateway_timeouts() {
    let config = AppConfig::from_toml_str(FULL).unwrap();
    assert_eq!(config.trello.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    let config =
        AppConfig::from_toml_str("[trello]\ntimeout_secs = 3\n[slack]\ntimeout_secs = 7").unwrap();
    assert_eq!(config.trello.timeout(), Duration::from_secs(3));
    assert_eq!(config.slack.timeout(), Duration::from_secs(7));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = AppConfig::load(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
