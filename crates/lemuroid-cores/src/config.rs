use crate::errors::{Result, SyncError};
use crate::registry::DEFAULT_CORES;
use crate::types::{DeliveryMode, LinkPreference, ToolsKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Buildbot folder holding the latest nightly Android cores.
pub const DEFAULT_BASE_URL: &str = "https://buildbot.libretro.com/nightly/android/latest";

/// Overrides `base_url` when set (mirrors, local test servers).
pub const BASE_URL_ENV: &str = "LEMUROID_CORES_BASE_URL";

/// Run configuration, usually read from `cores.json` next to the Gradle project.
///
/// ```json
/// { "cores": ["handy", "melondsds"], "delivery": "on-demand", "link": "auto" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cores: Vec<String>,
    pub base_url: String,
    pub delivery: DeliveryMode,
    pub tools: ToolsKind,
    pub link: LinkPreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cores: DEFAULT_CORES.iter().map(|c| c.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            delivery: DeliveryMode::default(),
            tools: ToolsKind::default(),
            link: LinkPreference::default(),
        }
    }
}

impl Config {
    /// Read a JSON config; absent fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|source| SyncError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&txt).map_err(|source| SyncError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `LEMUROID_CORES_BASE_URL` if present and non-empty.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cores.json");
        fs::write(&path, r#"{ "cores": ["handy"], "link": "copy" }"#).unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.cores, vec!["handy".to_string()]);
        assert_eq!(cfg.link, LinkPreference::Copy);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.delivery, DeliveryMode::OnDemand);
        assert_eq!(cfg.tools, ToolsKind::Native);
    }

    #[test]
    fn bad_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cores.json");
        fs::write(&path, "{ cores: ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::Config { .. }));
        assert!(err.to_string().contains("cores.json"));
    }

    #[test]
    fn missing_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent-cores.json");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::ConfigIo { .. }));
        assert!(err.to_string().contains("absent-cores.json"), "{err}");
    }

    #[test]
    fn default_cores_match_registry_defaults() {
        assert_eq!(Config::default().cores.len(), DEFAULT_CORES.len());
    }
}
