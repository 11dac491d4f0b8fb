//! Hub endpoint configuration.
//!
//! Reads/writes ~/.config/tradelink/hub.json (0600 on Unix). Resolution
//! order for the API base: explicit flag > `TRADELINK_API_BASE` env >
//! saved config > compiled default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default hub endpoint when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "https://hub.tradelink.app/api";

pub const API_BASE_ENV: &str = "TRADELINK_API_BASE";

/// Hub connection settings stored locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// API base URL (e.g., "https://hub.tradelink.app/api")
    pub api_base: String,
}

/// Returns the path to the hub config file.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("tradelink/hub.json"))
}

/// Load saved hub config from disk.
/// Returns None if nothing is saved or the file is invalid.
pub fn load_config() -> Option<HubConfig> {
    let path = config_file_path()?;
    let contents = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save hub config to disk. Creates the parent directory if needed and
/// sets 0600 permissions on Unix.
pub fn save_config(config: &HubConfig) -> Result<(), String> {
    let path = config_file_path().ok_or("Could not determine config directory")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let contents = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&path, &contents).map_err(|e| format!("Failed to write config file: {}", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, permissions)
            .map_err(|e| format!("Failed to set file permissions: {}", e))?;
    }

    Ok(())
}

/// Resolve the hub API base: flag > env > saved config > default.
pub fn resolve_api_base(flag: Option<String>) -> String {
    if let Some(base) = flag {
        let trimmed = base.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Ok(base) = std::env::var(API_BASE_ENV) {
        let trimmed = base.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    if let Some(config) = load_config() {
        return config.api_base;
    }

    DEFAULT_API_BASE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = HubConfig {
            api_base: "https://hub.test/api".into(),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: HubConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_base, "https://hub.test/api");
    }

    #[test]
    fn config_file_path_is_under_tradelink() {
        let path = config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("tradelink"));
        assert!(path.to_string_lossy().contains("hub.json"));
    }

    #[test]
    fn flag_beats_everything() {
        assert_eq!(
            resolve_api_base(Some("  https://flag.example  ".into())),
            "https://flag.example",
        );
    }

    #[test]
    fn blank_flag_falls_through() {
        // A blank flag behaves as if absent; the result is whatever the
        // env/config/default chain produces, never an empty string.
        let base = resolve_api_base(Some("   ".into()));
        assert!(!base.is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.json");

        // Write and read manually since save_config targets the real
        // config directory.
        let config = HubConfig {
            api_base: "https://hub.local/api".into(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: HubConfig = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded.api_base, "https://hub.local/api");
    }
}
