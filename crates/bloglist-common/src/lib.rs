//! Centralized configuration and directory structure for the bloglist client
//!
//! Directory layout:
//! ```text
//! bloglist/
//! ├── local/           # Persisted key-value storage (session)
//! └── logs/            # Rolling client logs
//! ```
//!
//! The API base URL is resolved from the environment, then the persistent
//! config file, then [`DEFAULT_API_URL`].

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3003";

/// Env var overriding the API base URL.
pub const API_URL_ENV: &str = "BLOGLIST_API_URL";

/// Env var overriding the data root.
pub const ROOT_ENV: &str = "BLOGLIST_ROOT";

/// How long a notification stays visible.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Get the global configuration path
fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bloglist").join("config.json"))
}

/// Read settings from an explicit path. Missing or malformed files yield defaults.
pub fn load_settings_from(path: &Path) -> ClientSettings {
    if !path.exists() {
        return ClientSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ClientSettings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse config file at {:?}: {}", path, e);
                ClientSettings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config file at {:?}: {}", path, e);
            ClientSettings::default()
        }
    }
}

/// Write settings to an explicit path, creating parent directories.
pub fn save_settings_to(path: &Path, settings: &ClientSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {:?}", parent))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

/// Load the persisted API URL from the global config file
pub fn load_persistent_api_url() -> Option<String> {
    let path = get_config_path()?;
    load_settings_from(&path).api_url
}

/// Save an API URL as the persistent default
pub fn save_persistent_api_url(url: &str) -> anyhow::Result<()> {
    let path = get_config_path().ok_or_else(|| anyhow::anyhow!("Could not determine config dir"))?;
    let mut settings = load_settings_from(&path);
    settings.api_url = Some(normalize_base_url(url));
    save_settings_to(&path, &settings)?;
    info!("Saved API URL to {:?}", path);
    Ok(())
}

/// Resolve the API base URL: explicit override, environment, persistent config, default.
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return normalize_base_url(url);
    }

    if let Ok(val) = std::env::var(API_URL_ENV) {
        if !val.trim().is_empty() {
            return normalize_base_url(&val);
        }
    }

    if let Some(url) = load_persistent_api_url() {
        return url;
    }

    DEFAULT_API_URL.to_string()
}

/// Strip whitespace and trailing slashes so paths can be appended with `/api/...`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get the data root from environment or the platform data directory
pub fn bloglist_root() -> PathBuf {
    if let Ok(val) = std::env::var(ROOT_ENV) {
        return PathBuf::from(val);
    }

    dirs::data_local_dir()
        .map(|d| d.join("bloglist"))
        .unwrap_or_else(|| PathBuf::from("bloglist_data"))
}

/// Local data directory (key-value storage)
pub fn local_dir() -> PathBuf {
    bloglist_root().join("local")
}

/// Log file directory
pub fn logs_dir() -> PathBuf {
    bloglist_root().join("logs")
}

/// Persisted key-value storage file
pub fn storage_path() -> PathBuf {
    local_dir().join("storage.json")
}

/// Ensure a single directory exists
pub fn ensure_dir(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        info!("Created directory: {:?}", path);
    }
    Ok(())
}

/// Initialize the directory structure. Call once at startup.
pub fn init_structure() -> anyhow::Result<PathBuf> {
    let root = bloglist_root();

    ensure_dir(&root)?;
    ensure_dir(&local_dir())?;
    ensure_dir(&logs_dir())?;

    let canonical = fs::canonicalize(&root).unwrap_or_else(|_| root.clone());
    info!("Bloglist directory structure initialized at: {:?}", canonical);

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" http://localhost:3003/ "),
            "http://localhost:3003"
        );
        assert_eq!(normalize_base_url("http://x//"), "http://x");
    }

    #[test]
    fn test_explicit_url_wins() {
        assert_eq!(
            resolve_api_url(Some("http://example.com/")),
            "http://example.com"
        );
    }

    #[test]
    fn test_settings_roundtrip_and_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        assert_eq!(load_settings_from(&path), ClientSettings::default());

        let settings = ClientSettings {
            api_url: Some("http://blogs.local".into()),
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), ClientSettings::default());
    }

    #[test]
    fn test_layout_is_under_root() {
        let root = bloglist_root();
        assert!(local_dir().starts_with(&root));
        assert!(logs_dir().starts_with(&root));
        assert!(storage_path().ends_with("storage.json"));
    }
}
