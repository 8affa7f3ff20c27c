// tests/list_test.rs
use git_semv::error::SemvError;
use git_semv::git::MockTagSource;
use git_semv::semver::{Semver, VersionList, DEFAULT_PREFIX};

#[test]
fn strict_list_over_mixed_tags() {
    let source = MockTagSource::new().with_tags(&["v1.0.0", "v1.1.0-rc.1", "vbadtag", "v0.9.0"]);

    let list = VersionList::from_source(&source, DEFAULT_PREFIX, true).unwrap();

    let got: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    assert_eq!(got, vec!["1.0.0", "0.9.0"]);
}

#[test]
fn all_list_retains_pre_release_versions() {
    let source = MockTagSource::new().with_tags(&["v1.0.0", "v1.1.0-rc.1", "vbadtag", "v0.9.0"]);

    let list = VersionList::from_source(&source, DEFAULT_PREFIX, false).unwrap();

    let got: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    assert_eq!(got, vec!["1.1.0-rc.1", "1.0.0", "0.9.0"]);
}

#[test]
fn list_display_is_prefixed_one_per_line() {
    let source = MockTagSource::new().with_tags(&["v0.9.0", "v1.0.0"]);

    let list = VersionList::from_source(&source, DEFAULT_PREFIX, true).unwrap();
    assert_eq!(list.to_string(), "v1.0.0\nv0.9.0");
}

#[test]
fn list_latest_follows_semver_precedence_not_tag_order() {
    let source = MockTagSource::new().with_tags(&["v2.0.0", "v10.0.0", "v9.0.0"]);

    let list = VersionList::from_source(&source, DEFAULT_PREFIX, true).unwrap();
    assert_eq!(list.latest().unwrap(), &Semver::new(10, 0, 0));
}

#[test]
fn list_source_failure_propagates() {
    let source = MockTagSource::unavailable();

    let err = VersionList::from_source(&source, DEFAULT_PREFIX, true).unwrap_err();
    assert!(matches!(err, SemvError::SourceUnavailable(_)));
}

#[test]
fn list_with_custom_prefix() {
    let source = MockTagSource::new().with_tags(&["rel-1.0.0", "rel-2.0.0", "v3.0.0"]);

    let list = VersionList::from_source(&source, "rel-", true).unwrap();

    // "v3.0.0" lacks the configured prefix and "v3" is not a number
    let got: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    assert_eq!(got, vec!["2.0.0", "1.0.0"]);
}
