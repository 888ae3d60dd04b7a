use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillsyncError {
    #[error("skills root not found: {0}")]
    SkillsRootMissing(PathBuf),

    #[error("skill not found: {0}")]
    SkillNotFound(String),

    #[error("'{0}' exists but is not a symlink; remove it manually")]
    Conflict(PathBuf),

    #[error("invalid skill name '{0}': must not contain path separators or '..'")]
    InvalidName(String),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SkillsyncError>;
