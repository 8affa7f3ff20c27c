//! Tag source abstraction
//!
//! The version-computation core never talks to git directly; it goes through
//! the [TagSource] trait so it can be tested without a repository. The
//! concrete implementations are:
//!
//! - [repository::GitTagSource]: real implementation using the `git2` crate
//! - [mock::MockTagSource]: in-memory implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::GitTagSource;

use crate::error::Result;

/// Read and write access to a repository's tags
///
/// Both read operations fail with [crate::error::SemvError::SourceUnavailable]
/// when not run inside a valid repository; implementations map their
/// underlying errors accordingly.
pub trait TagSource: Send + Sync {
    /// List all tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// The most recent tag reachable from HEAD (describe semantics), or
    /// `None` when no tag exists
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Abbreviated commit id of HEAD, used as the default build suffix
    fn head_short_id(&self) -> Result<String>;

    /// Create a lightweight tag at HEAD
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to a remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
