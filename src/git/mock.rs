use crate::error::{Result, SemvError};
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
///
/// Tags are returned in insertion order; the last inserted tag plays the
/// role of the nearest-reachable tag from HEAD.
pub struct MockTagSource {
    tags: Vec<String>,
    head_id: String,
    unavailable: bool,
}

impl MockTagSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        MockTagSource {
            tags: Vec::new(),
            head_id: "3222d31".to_string(),
            unavailable: false,
        }
    }

    /// Seed the source with tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Override the abbreviated HEAD id
    pub fn with_head_id(mut self, id: impl Into<String>) -> Self {
        self.head_id = id.into();
        self
    }

    /// Make every query fail as if run outside a repository
    pub fn unavailable() -> Self {
        MockTagSource {
            tags: Vec::new(),
            head_id: String::new(),
            unavailable: true,
        }
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            Err(SemvError::source_unavailable("not a git repository"))
        } else {
            Ok(())
        }
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        self.check_available()?;
        Ok(self.tags.clone())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.tags.last().cloned())
    }

    fn head_short_id(&self) -> Result<String> {
        self.check_available()?;
        Ok(self.head_id.clone())
    }

    fn create_tag(&self, _name: &str) -> Result<()> {
        self.check_available()
    }

    fn push_tag(&self, _remote: &str, _name: &str) -> Result<()> {
        self.check_available()
    }
}
