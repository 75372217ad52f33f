use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// HealthStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Progressing,
    Degraded,
    Suspended,
    Missing,
    /// Catch-all for statuses this version does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    pub fn all() -> &'static [HealthStatus] {
        &[
            HealthStatus::Healthy,
            HealthStatus::Progressing,
            HealthStatus::Degraded,
            HealthStatus::Suspended,
            HealthStatus::Missing,
            HealthStatus::Unknown,
        ]
    }

    /// The literal label shown on the badge.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Progressing => "Progressing",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Suspended => "Suspended",
            HealthStatus::Missing => "Missing",
            HealthStatus::Unknown => "Unknown",
        }
    }

    /// Aggregation rank, worst first: Unknown, Degraded, Progressing,
    /// Suspended, Missing, Healthy. Any non-Healthy status dominates
    /// Healthy when a project is reduced to a single badge.
    pub fn severity(self) -> usize {
        match self {
            HealthStatus::Unknown => 0,
            HealthStatus::Degraded => 1,
            HealthStatus::Progressing => 2,
            HealthStatus::Suspended => 3,
            HealthStatus::Missing => 4,
            HealthStatus::Healthy => 5,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = crate::error::VaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthy" => Ok(HealthStatus::Healthy),
            "progressing" => Ok(HealthStatus::Progressing),
            "degraded" => Ok(HealthStatus::Degraded),
            "suspended" => Ok(HealthStatus::Suspended),
            "missing" => Ok(HealthStatus::Missing),
            "unknown" => Ok(HealthStatus::Unknown),
            _ => Err(crate::error::VaneError::InvalidHealth(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SyncStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Synced,
    OutOfSync,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SyncStatus {
    pub fn all() -> &'static [SyncStatus] {
        &[SyncStatus::Synced, SyncStatus::OutOfSync, SyncStatus::Unknown]
    }

    /// The literal label shown on the badge.
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Synced => "Synced",
            SyncStatus::OutOfSync => "OutOfSync",
            SyncStatus::Unknown => "Unknown",
        }
    }

    /// Aggregation rank, worst first: OutOfSync dominates Synced dominates
    /// Unknown.
    pub fn severity(self) -> usize {
        match self {
            SyncStatus::OutOfSync => 0,
            SyncStatus::Synced => 1,
            SyncStatus::Unknown => 2,
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SyncStatus {
    type Err = crate::error::VaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "synced" => Ok(SyncStatus::Synced),
            "out_of_sync" => Ok(SyncStatus::OutOfSync),
            "unknown" => Ok(SyncStatus::Unknown),
            _ => Err(crate::error::VaneError::InvalidSync(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SyncResult / Application
// ---------------------------------------------------------------------------

/// Outcome of an application's last sync operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub revision: String,
}

fn default_project() -> String {
    "default".to_string()
}

/// A tracked application: its identity plus the last observed status
/// snapshot. The registry file is the source of truth; nothing here is
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default)]
    pub health: HealthStatus,
    #[serde(default)]
    pub sync: SyncStatus,
    /// Absent until the first sync completes. No last sync means no
    /// revision, not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<SyncResult>,
}

impl Application {
    pub fn new(name: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            health: HealthStatus::Unknown,
            sync: SyncStatus::Unknown,
            last_sync: None,
        }
    }

    /// Revision recorded by the last sync operation, if any.
    pub fn revision(&self) -> Option<&str> {
        self.last_sync.as_ref().map(|s| s.revision.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
