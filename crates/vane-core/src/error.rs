use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaneError {
    #[error("not initialized: run 'vane init'")]
    NotInitialized,

    #[error("application not found: {0}")]
    AppNotFound(String),

    #[error("application already exists: {0}")]
    AppExists(String),

    #[error("invalid name '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidName(String),

    #[error("invalid health status: {0}")]
    InvalidHealth(String),

    #[error("invalid sync status: {0}")]
    InvalidSync(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, VaneError>;
