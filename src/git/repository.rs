use crate::error::{Result, SemvError};
use crate::git::TagSource;
use git2::{DescribeFormatOptions, DescribeOptions, Repository};
use std::path::Path;

/// Tag source backed by a real repository via the `git2` crate
pub struct GitTagSource {
    repo: Repository,
}

impl GitTagSource {
    /// Discover the repository containing `path`
    ///
    /// Failure to discover one (not inside a work tree) surfaces as
    /// [SemvError::SourceUnavailable].
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|e| SemvError::source_unavailable(e.message().to_string()))?;

        Ok(GitTagSource { repo })
    }

    /// Wrap an already opened repository
    pub fn from_repository(repo: Repository) -> Self {
        GitTagSource { repo }
    }
}

impl TagSource for GitTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        match self.repo.describe(&opts) {
            Ok(describe) => {
                // Abbreviation size zero yields the bare nearest tag name
                let mut format = DescribeFormatOptions::new();
                format.abbreviated_size(0);

                let tag = describe.format(Some(&format))?;
                Ok(Some(tag))
            }
            // Describe fails on a tagless history; report that as "none"
            // rather than an error.
            Err(e) => {
                if self.list_tags()?.is_empty() {
                    Ok(None)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    fn head_short_id(&self) -> Result<String> {
        let head = self.repo.head()?;
        let commit = head.peel_to_commit()?;
        let short = commit.as_object().short_id()?;

        Ok(short.as_str().unwrap_or("").to_string())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?;
        let target = head.peel(git2::ObjectType::Commit)?;

        self.repo.tag_lightweight(name, &target, false)?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| SemvError::remote(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);

        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| SemvError::remote(format!("Push failed: {}", e)))?;

        Ok(())
    }
}

impl std::fmt::Debug for GitTagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // git2::Repository does not implement Debug
        f.debug_struct("GitTagSource").finish_non_exhaustive()
    }
}

// SAFETY: GitTagSource wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for GitTagSource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_outside_repository() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitTagSource::discover(dir.path()).unwrap_err();
        assert!(matches!(err, SemvError::SourceUnavailable(_)));
    }
}
