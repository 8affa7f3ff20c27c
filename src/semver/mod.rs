//! Semantic version domain model
//!
//! Parsing, precedence, listing, and next-version arithmetic for tags of the
//! form `<prefix>major.minor.patch[-pre][+build]`.

pub mod identifier;
pub mod list;
pub mod version;

pub use identifier::Identifier;
pub use list::VersionList;
pub use version::{BumpKind, Semver, DEFAULT_PREFIX};

use crate::error::{Result, SemvError};
use crate::git::TagSource;

/// Resolve the current version from the nearest tag reachable from HEAD
///
/// Parses permissively (pre-release and build variants are accepted). An
/// empty tag set is an explicit [SemvError::NoVersionFound], never a default
/// version.
pub fn current(source: &dyn TagSource, prefix: &str) -> Result<Semver> {
    let tag = source.latest_tag()?.ok_or(SemvError::NoVersionFound)?;
    Semver::parse(&tag, prefix)
}
