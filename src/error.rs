use thiserror::Error;

/// Unified error type for git-semv operations
#[derive(Error, Debug)]
pub enum SemvError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("Cannot query tags: {0}")]
    SourceUnavailable(String),

    #[error("No version tag found")]
    NoVersionFound,

    #[error("Invalid bump kind: {0}")]
    InvalidBumpKind(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semv
pub type Result<T> = std::result::Result<T, SemvError>;

impl SemvError {
    /// Create a version-format error with context
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        SemvError::InvalidFormat(msg.into())
    }

    /// Create a tag-source error with context
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        SemvError::SourceUnavailable(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemvError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SemvError::Remote(msg.into())
    }
}
