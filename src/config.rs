//! Configuration management
//!
//! Everything the host needs comes from one TOML file, by default
//! `~/.cardwarden/config.toml`:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:3000"
//! path = "/webhooks/trello"
//!
//! [store]
//! backend = "file"            # or "memory"
//! path = "/var/lib/cardwarden/tracked.json"
//!
//! [trello]                    # or TRELLO_KEY / TRELLO_TOKEN
//! api_key = "..."
//! token = "..."
//! timeout_secs = 10
//!
//! [slack]                     # or SLACK_WEBHOOK_URL
//! webhook_url = "https://hooks.slack.com/services/..."
//! timeout_secs = 10
//!
//! [scopes.5f1d0c]             # board id
//! base_rules = [{ rule = "title_min_length", min = 10 }]
//! defaults = { notification_target = "#cards" }
//!
//! [scopes.5f1d0c.list_rules]
//! done = [{ rule = "checklists_complete" }]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::trello::TrelloCredentials;
use crate::core::models::ScopeConfig;
use crate::core::ports::StorageBackend;
use crate::paths;

/// Gateway request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors loading or interpreting the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unknown store backend name
    #[error("{0}")]
    Backend(String),

    /// A credential is neither in the file nor in the environment
    #[error("missing credential: set {0} or add it to the config file")]
    MissingCredential(&'static str),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Webhook server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Tracking store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Board API credentials
    #[serde(default)]
    pub trello: TrelloConfig,
    /// Chat delivery settings
    #[serde(default)]
    pub slack: SlackConfig,
    /// Per-board configuration, keyed by board id
    #[serde(default)]
    pub scopes: HashMap<String, ScopeConfig>,
}

/// Webhook server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Path Trello posts to
    #[serde(default = "default_webhook_path")]
    pub path: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_webhook_path() -> String {
    "/webhooks/trello".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            path: default_webhook_path(),
        }
    }
}

/// Tracking store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend name: `memory` or `file`
    #[serde(default = "default_backend")]
    pub backend: String,
    /// File backend location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_backend() -> String {
    StorageBackend::default().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: None,
        }
    }
}

/// Board API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// Application key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Member token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API root override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl TrelloConfig {
    /// Per-request timeout, [`DEFAULT_TIMEOUT_SECS`] unless configured
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Chat delivery settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Incoming webhook URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SlackConfig {
    /// Per-request timeout, [`DEFAULT_TIMEOUT_SECS`] unless configured
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Read a non-empty environment variable
#[must_use]
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Pick the config path: explicit flag, then `CARDWARDEN_CONFIG`, then the default
    pub fn resolve_path(
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> PathBuf {
        explicit
            .or_else(|| lookup(paths::CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(paths::global_config)
    }

    /// Resolve and load the config
    ///
    /// Only a missing default file falls back to built-in defaults; a path
    /// named by the flag or by `CARDWARDEN_CONFIG` must exist.
    pub fn load_or_default(
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let named = explicit.is_some() || lookup(paths::CONFIG_ENV).is_some();
        let path = Self::resolve_path(explicit, &lookup);

        if !named && !path.exists() {
            warn!("No config at {}; using defaults with no boards configured", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load config from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.scopes =
            config.scopes.into_iter().map(|(id, scope)| (id, scope.normalized())).collect();
        Ok(config)
    }

    /// Configured store backend
    pub fn store_backend(&self) -> Result<StorageBackend, ConfigError> {
        self.store.backend.parse().map_err(ConfigError::Backend)
    }

    /// File backend location (defaults under the global directory)
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(paths::default_store)
    }

    /// Board API credentials, falling back to `TRELLO_KEY` / `TRELLO_TOKEN`
    pub fn trello_credentials(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<TrelloCredentials, ConfigError> {
        let api_key = self
            .trello
            .api_key
            .clone()
            .or_else(|| lookup("TRELLO_KEY"))
            .ok_or(ConfigError::MissingCredential("TRELLO_KEY"))?;
        let token = self
            .trello
            .token
            .clone()
            .or_else(|| lookup("TRELLO_TOKEN"))
            .ok_or(ConfigError::MissingCredential("TRELLO_TOKEN"))?;
        Ok(TrelloCredentials { api_key, token })
    }

    /// Slack webhook URL, falling back to `SLACK_WEBHOOK_URL`
    #[must_use]
    pub fn slack_webhook(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.slack.webhook_url.clone().or_else(|| lookup("SLACK_WEBHOOK_URL"))
    }
}
