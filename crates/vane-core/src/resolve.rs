use crate::error::Result;
use crate::store::ApplicationStore;
use crate::types::{Application, HealthStatus, SyncStatus};

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// What a badge request points at: one application, or every application
/// under a project label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Name(String),
    Project(String),
}

impl Selector {
    /// Build a selector from the request's `name`/`project` parameters.
    /// `name` wins when both are supplied; neither present yields `None`,
    /// which resolves like any other not-found.
    pub fn from_params(name: Option<&str>, project: Option<&str>) -> Option<Selector> {
        match (name, project) {
            (Some(n), _) => Some(Selector::Name(n.to_string())),
            (None, Some(p)) => Some(Selector::Project(p.to_string())),
            (None, None) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedStatus
// ---------------------------------------------------------------------------

/// A single status snapshot: either one application's status or the
/// worst-case reduction of a project. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatus {
    pub health: HealthStatus,
    pub sync: SyncStatus,
    pub revision: Option<String>,
}

fn status_of(app: &Application) -> ResolvedStatus {
    ResolvedStatus {
        health: app.health,
        sync: app.sync,
        revision: app.revision().map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

/// Resolve a selector to a status snapshot. `Ok(None)` means nothing
/// matched; callers render that the same as a disabled badge.
pub fn resolve(store: &dyn ApplicationStore, selector: &Selector) -> Result<Option<ResolvedStatus>> {
    match selector {
        Selector::Name(name) => Ok(store.get(name)?.map(|app| status_of(&app))),
        Selector::Project(project) => Ok(aggregate(&store.list_project(project)?)),
    }
}

/// Reduce a project's applications to one worst-case status.
///
/// Health rank (worst first): Unknown, Degraded, Progressing, Suspended,
/// Missing, Healthy. Sync rank: OutOfSync, Synced, Unknown. The strict `<`
/// keeps the first application at the worst rank, which also supplies the
/// aggregate revision.
fn aggregate(apps: &[Application]) -> Option<ResolvedStatus> {
    let (first, rest) = apps.split_first()?;
    let mut dominant = first;
    let mut sync = first.sync;
    for app in rest {
        if app.health.severity() < dominant.health.severity() {
            dominant = app;
        }
        if app.sync.severity() < sync.severity() {
            sync = app.sync;
        }
    }
    Some(ResolvedStatus {
        health: dominant.health,
        sync,
        revision: dominant.revision().map(str::to_string),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
