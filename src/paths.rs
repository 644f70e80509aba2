//! Centralized path definitions for cardwarden
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.cardwarden/
//! ├── config.toml               # Server, credentials, per-board rules
//! └── tracked.json              # Tracking records (file backend)
//! ```

use std::path::PathBuf;

/// Global directory under the home directory
const GLOBAL_DIR: &str = ".cardwarden";

/// Global configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default tracking store filename
const TRACKED_FILE: &str = "tracked.json";

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "CARDWARDEN_CONFIG";

/// Get the global directory path.
///
/// Returns `~/.cardwarden/`.
#[must_use]
pub fn global_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.cardwarden/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default tracking store path.
///
/// Returns `~/.cardwarden/tracked.json`.
#[must_use]
pub fn default_store() -> PathBuf {
    global_dir().join(TRACKED_FILE)
}
