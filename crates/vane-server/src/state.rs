use std::path::PathBuf;
use std::sync::Arc;
use vane_core::config::FileSettingsStore;
use vane_core::registry::FileApplicationStore;
use vane_core::store::{ApplicationStore, SettingsStore};

/// Shared application state passed to all route handlers. The stores are
/// injected so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub apps: Arc<dyn ApplicationStore>,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    pub fn new(apps: Arc<dyn ApplicationStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self { apps, settings }
    }

    /// Wire up the file-backed stores under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            apps: Arc::new(FileApplicationStore::new(root.clone())),
            settings: Arc::new(FileSettingsStore::new(root)),
        }
    }
}
