use crate::error::Result;
use crate::git::TagSource;
use crate::semver::version::Semver;
use std::fmt;

/// Sorted collection of versions parsed from repository tags
///
/// Holds one entry per source tag that survives filtering, sorted
/// descending. Tags that do not parse as versions are silently skipped;
/// strict mode additionally drops anything carrying pre-release or build
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<Semver>,
    prefix: String,
}

impl VersionList {
    /// Build a list from raw tag strings
    pub fn from_tags(tags: &[String], prefix: &str, strict: bool) -> Self {
        let mut versions: Vec<Semver> = tags
            .iter()
            .filter_map(|tag| Semver::parse(tag, prefix).ok())
            .filter(|v| !strict || v.is_release())
            .collect();

        versions.sort_by(|a, b| b.cmp(a));

        VersionList {
            versions,
            prefix: prefix.to_string(),
        }
    }

    /// Build a list by querying a tag source
    ///
    /// Source failures (not a repository, etc.) propagate untouched.
    pub fn from_source(source: &dyn TagSource, prefix: &str, strict: bool) -> Result<Self> {
        let tags = source.list_tags()?;
        Ok(Self::from_tags(&tags, prefix, strict))
    }

    /// The greatest version in the list, if any
    pub fn latest(&self) -> Option<&Semver> {
        self.versions.first()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Semver> {
        self.versions.iter()
    }
}

impl fmt::Display for VersionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .versions
            .iter()
            .map(|v| v.to_tag(&self.prefix))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
