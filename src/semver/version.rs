use crate::error::{Result, SemvError};
use crate::semver::identifier::{parse_pre_release, Identifier};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default tag prefix stripped on parse and re-applied on display
pub const DEFAULT_PREFIX: &str = "v";

/// Semantic version representation
///
/// Immutable value type; bump and suffix operations return a new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release identifiers; empty means a release version
    pub pre: Vec<Identifier>,
    /// Build metadata, carried for display only
    pub build: Option<String>,
}

impl Semver {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Semver {
            major,
            minor,
            patch,
            pre: Vec::new(),
            build: None,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3-rc.0+build5")
    ///
    /// Strips `prefix` if the tag starts with it; otherwise parses the raw
    /// string. Build metadata is everything after the first '+'; pre-release
    /// is everything after the first '-' before that. The remaining core must
    /// be exactly three dot-separated non-negative integers.
    pub fn parse(tag: &str, prefix: &str) -> Result<Self> {
        let raw = tag.strip_prefix(prefix).unwrap_or(tag);

        let (rest, build) = match raw.split_once('+') {
            Some((rest, build)) => (rest, Some(build.to_string())),
            None => (raw, None),
        };

        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, parse_pre_release(pre)?),
            None => (rest, Vec::new()),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(SemvError::invalid_format(format!(
                "'{}' - expected X.Y.Z",
                tag
            )));
        }

        let major = parse_core_component(parts[0], tag)?;
        let minor = parse_core_component(parts[1], tag)?;
        let patch = parse_core_component(parts[2], tag)?;

        Ok(Semver {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    /// Whether this is a plain release (no pre-release, no build metadata)
    pub fn is_release(&self) -> bool {
        self.pre.is_empty() && self.build.is_none()
    }

    /// Compute the next version for a bump kind
    ///
    /// Subordinate components reset to zero; pre-release and build metadata
    /// are always cleared.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Semver::new(self.major + 1, 0, 0),
            BumpKind::Minor => Semver::new(self.major, self.minor + 1, 0),
            BumpKind::Patch => Semver::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// Attach a pre-release suffix
    ///
    /// With a label, the pre-release becomes `label.0` (e.g., "rc.0");
    /// without one it is the bare numeric counter "0". The label must be a
    /// valid alphanumeric/hyphen identifier.
    pub fn with_pre_release(mut self, label: Option<&str>) -> Result<Self> {
        self.pre = match label {
            Some(label) => vec![Identifier::parse(label)?, Identifier::Numeric(0)],
            None => vec![Identifier::Numeric(0)],
        };
        Ok(self)
    }

    /// Attach build metadata
    pub fn with_build(mut self, name: impl Into<String>) -> Self {
        self.build = Some(name.into());
        self
    }

    /// Format as a tag string with the given prefix (e.g., "v1.2.3-rc.0")
    pub fn to_tag(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }

    /// Precedence comparison per semver rules; build metadata is ignored
    pub fn precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // Vec's lexicographic ordering matches semver: first
                // differing identifier decides, a strict prefix is less.
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

fn parse_core_component(s: &str, tag: &str) -> Result<u64> {
    // u64::from_str accepts a leading '+', which is not a valid version
    // component, so restrict to digits up front.
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(SemvError::invalid_format(format!(
            "'{}' - component '{}' is not a non-negative integer",
            tag, s
        )));
    }

    s.parse::<u64>().map_err(|_| {
        SemvError::invalid_format(format!("'{}' - component '{}' out of range", tag, s))
    })
}

impl Ord for Semver {
    fn cmp(&self, other: &Self) -> Ordering {
        // Build metadata never affects precedence; it only tie-breaks so the
        // order stays total and consistent with Eq.
        self.precedence(other)
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl PartialOrd for Semver {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, id) in self.pre.iter().enumerate() {
            let sep = if i == 0 { '-' } else { '.' };
            write!(f, "{}{}", sep, id)?;
        }

        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }

        Ok(())
    }
}

/// Version bump kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = SemvError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(SemvError::InvalidBumpKind(other.to_string())),
        }
    }
}
