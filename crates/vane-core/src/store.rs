use crate::error::Result;
use crate::types::Application;

/// Read access to the tracked applications.
///
/// The badge pipeline never writes through this interface; implementations
/// are free to re-read backing state on every call. Injected as a trait
/// object so tests can substitute in-memory fakes.
pub trait ApplicationStore: Send + Sync {
    /// Look up a single application by name.
    fn get(&self, name: &str) -> Result<Option<Application>>;

    /// All applications whose project label matches.
    fn list_project(&self, project: &str) -> Result<Vec<Application>>;
}

/// Read access to the badge feature configuration.
///
/// Callers must treat a failed lookup as "disabled"; see [`crate::gate`].
pub trait SettingsStore: Send + Sync {
    /// Whether badge emission is enabled at all.
    fn badge_enabled(&self) -> Result<bool>;

    /// Whether the revision suffix may be shown on request.
    fn revision_enabled(&self) -> Result<bool>;
}
