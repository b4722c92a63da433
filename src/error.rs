use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-tag-version operations
#[derive(Error, Debug)]
pub enum TagVersionError {
    #[error("Repository not found at '{}': {source}", .path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Version error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tag-version
pub type Result<T> = std::result::Result<T, TagVersionError>;

impl TagVersionError {
    /// Create a repository-not-found error for `path`
    pub fn repository_not_found(path: impl Into<PathBuf>, source: git2::Error) -> Self {
        TagVersionError::RepositoryNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TagVersionError::Version(msg.into())
    }

    /// True when the error means there is no repository at the given path
    pub fn is_repository_not_found(&self) -> bool {
        matches!(self, TagVersionError::RepositoryNotFound { .. })
    }
}
