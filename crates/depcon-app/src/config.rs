//! Configuration file parsing for depcon
//!
//! A single `config.toml` under the platform config directory holds the
//! backend base URL; the `--server` CLI flag overrides it.

use std::path::{Path, PathBuf};

use depcon_core::prelude::*;
use serde::Deserialize;

const CONFIG_FILENAME: &str = "config.toml";
const DEPCON_DIR: &str = "depcon";

/// Default backend location when neither config nor CLI provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the deployment backend.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Default config location: `~/.config/depcon/config.toml` (platform
/// equivalent).
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(DEPCON_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parses_server_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[server]\nbase_url = \"https://deploy.internal:8443\"\n",
        )
        .unwrap();
        let settings = load_settings(Some(&path));
        assert_eq!(settings.server.base_url, "https://deploy.internal:8443");
    }

    #[test]
    fn test_defaults_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "server = not valid toml [").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\n").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }
}
