use crate::error::{Result, VaneError};
use crate::paths;
use crate::store::ApplicationStore;
use crate::types::Application;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// The set of tracked applications, persisted as `.vane/apps.yaml`.
///
/// Status fields are written by `vane app set` (or any external agent that
/// owns the file) and only ever read by the badge pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Registry {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::apps_path(root);
        if !path.exists() {
            return Err(VaneError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let registry: Registry = serde_yaml::from_str(&data)?;
        Ok(registry)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::apps_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn get(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Application> {
        self.applications.iter_mut().find(|a| a.name == name)
    }

    /// Applications carrying the given project label, in file order.
    pub fn list_project(&self, project: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|a| a.project == project)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// FileApplicationStore
// ---------------------------------------------------------------------------

/// Application store reloading `.vane/apps.yaml` on every lookup, so the
/// server always serves the current file contents.
pub struct FileApplicationStore {
    root: PathBuf,
}

impl FileApplicationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ApplicationStore for FileApplicationStore {
    fn get(&self, name: &str) -> Result<Option<Application>> {
        let registry = Registry::load(&self.root)?;
        Ok(registry.get(name).cloned())
    }

    fn list_project(&self, project: &str) -> Result<Vec<Application>> {
        let registry = Registry::load(&self.root)?;
        Ok(registry
            .list_project(project)
            .into_iter()
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HealthStatus, SyncResult, SyncStatus};
    use tempfile::TempDir;

    fn sample() -> Registry {
        let mut guestbook = Application::new("guestbook", "default");
        guestbook.health = HealthStatus::Healthy;
        guestbook.sync = SyncStatus::Synced;
        guestbook.last_sync = Some(SyncResult {
            revision: "aa29b85".to_string(),
        });
        let billing = Application::new("billing", "payments");
        Registry {
            applications: vec![guestbook, billing],
        }
    }

    #[test]
    fn registry_roundtrip() {
        let dir = TempDir::new().unwrap();
        sample().save(dir.path()).unwrap();

        let loaded = Registry::load(dir.path()).unwrap();
        assert_eq!(loaded.applications.len(), 2);
        let guestbook = loaded.get("guestbook").unwrap();
        assert_eq!(guestbook.health, HealthStatus::Healthy);
        assert_eq!(guestbook.revision(), Some("aa29b85"));
    }

    #[test]
    fn load_without_file_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Registry::load(dir.path()),
            Err(VaneError::NotInitialized)
        ));
    }

    #[test]
    fn list_project_filters_by_label() {
        let registry = sample();
        let apps = registry.list_project("payments");
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "billing");
        assert!(registry.list_project("nonexistent").is_empty());
    }

    #[test]
    fn file_store_get_and_list() {
        let dir = TempDir::new().unwrap();
        sample().save(dir.path()).unwrap();

        let store = FileApplicationStore::new(dir.path());
        let app = store.get("guestbook").unwrap().unwrap();
        assert_eq!(app.sync, SyncStatus::Synced);
        assert!(store.get("missing-app").unwrap().is_none());
        assert_eq!(store.list_project("default").unwrap().len(), 1);
    }

    #[test]
    fn file_store_sees_external_edits() {
        let dir = TempDir::new().unwrap();
        sample().save(dir.path()).unwrap();
        let store = FileApplicationStore::new(dir.path());
        assert_eq!(
            store.get("guestbook").unwrap().unwrap().health,
            HealthStatus::Healthy
        );

        let mut registry = Registry::load(dir.path()).unwrap();
        registry.get_mut("guestbook").unwrap().health = HealthStatus::Degraded;
        registry.save(dir.path()).unwrap();

        assert_eq!(
            store.get("guestbook").unwrap().unwrap().health,
            HealthStatus::Degraded
        );
    }
}
