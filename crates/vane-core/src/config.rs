use crate::error::{Result, VaneError};
use crate::paths;
use crate::store::SettingsStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// BadgeSettings
// ---------------------------------------------------------------------------

/// Feature flags for badge emission. Both default to off: a fresh
/// installation must not leak status to anonymous viewers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeSettings {
    /// Master switch for the badge endpoint.
    #[serde(default)]
    pub enabled: bool,
    /// Allow the short-revision suffix when a request asks for it.
    #[serde(default)]
    pub revision: bool,
}

// ---------------------------------------------------------------------------
// Settings (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub badge: BadgeSettings,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: 1,
            badge: BadgeSettings::default(),
        }
    }
}

impl Settings {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(VaneError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let settings: Settings = serde_yaml::from_str(&data)?;
        Ok(settings)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// FileSettingsStore
// ---------------------------------------------------------------------------

/// Settings store reading `.vane/config.yaml` on every lookup, so flag
/// changes take effect without restarting the server.
pub struct FileSettingsStore {
    root: PathBuf,
}

impl FileSettingsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SettingsStore for FileSettingsStore {
    fn badge_enabled(&self) -> Result<bool> {
        Ok(Settings::load(&self.root)?.badge.enabled)
    }

    fn revision_enabled(&self) -> Result<bool> {
        Ok(Settings::load(&self.root)?.badge.revision)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
