//! Pre-release identifiers and their precedence
//!
//! A pre-release is a dot-separated sequence of identifiers. Each identifier
//! is either numeric ("0", "42") or alphanumeric ("alpha", "rc-2"). Numeric
//! identifiers compare numerically and always rank below alphanumeric ones;
//! alphanumeric identifiers compare lexically. See semver.org spec item 11.

use crate::error::{Result, SemvError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// All-digit identifier, compared numerically
    Numeric(u64),
    /// Identifier containing at least one non-digit, compared lexically
    AlphaNumeric(String),
}

impl Identifier {
    /// Parse a single identifier
    ///
    /// Accepts non-empty strings of ASCII alphanumerics and hyphens.
    /// All-digit strings become [Identifier::Numeric].
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Identifier {
    type Err = SemvError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(SemvError::invalid_format("empty pre-release identifier"));
        }

        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(SemvError::invalid_format(format!(
                "invalid pre-release identifier: '{}'",
                s
            )));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            let n = s.parse::<u64>().map_err(|_| {
                SemvError::invalid_format(format!("numeric identifier out of range: '{}'", s))
            })?;
            Ok(Identifier::Numeric(n))
        } else {
            Ok(Identifier::AlphaNumeric(s.to_string()))
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a full pre-release string ("rc.1", "alpha-2.beta") into identifiers
pub fn parse_pre_release(s: &str) -> Result<Vec<Identifier>> {
    if s.is_empty() {
        return Err(SemvError::invalid_format("empty pre-release"));
    }

    s.split('.').map(Identifier::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(Identifier::parse("0").unwrap(), Identifier::Numeric(0));
        assert_eq!(Identifier::parse("42").unwrap(), Identifier::Numeric(42));
    }

    #[test]
    fn test_parse_alphanumeric() {
        assert_eq!(
            Identifier::parse("alpha").unwrap(),
            Identifier::AlphaNumeric("alpha".to_string())
        );
        assert_eq!(
            Identifier::parse("rc-2").unwrap(),
            Identifier::AlphaNumeric("rc-2".to_string())
        );
    }

    #[test]
    fn test_parse_mixed_digits_is_alphanumeric() {
        assert_eq!(
            Identifier::parse("1a").unwrap(),
            Identifier::AlphaNumeric("1a".to_string())
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(Identifier::parse("").is_err());
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert!(Identifier::parse("rc.1").is_err());
        assert!(Identifier::parse("bad!").is_err());
        assert!(Identifier::parse("+3").is_err());
    }

    #[test]
    fn test_numeric_orders_numerically() {
        assert!(Identifier::Numeric(2) < Identifier::Numeric(11));
    }

    #[test]
    fn test_numeric_below_alphanumeric() {
        assert!(Identifier::Numeric(999) < Identifier::AlphaNumeric("0a".to_string()));
    }

    #[test]
    fn test_alphanumeric_orders_lexically() {
        assert!(
            Identifier::AlphaNumeric("alpha".to_string())
                < Identifier::AlphaNumeric("beta".to_string())
        );
    }

    #[test]
    fn test_parse_pre_release_sequence() {
        let ids = parse_pre_release("rc.1").unwrap();
        assert_eq!(
            ids,
            vec![
                Identifier::AlphaNumeric("rc".to_string()),
                Identifier::Numeric(1)
            ]
        );
    }

    #[test]
    fn test_parse_pre_release_rejects_empty_segment() {
        assert!(parse_pre_release("rc..1").is_err());
        assert!(parse_pre_release("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(Identifier::Numeric(7).to_string(), "7");
        assert_eq!(
            Identifier::AlphaNumeric("beta".to_string()).to_string(),
            "beta"
        );
    }
}
