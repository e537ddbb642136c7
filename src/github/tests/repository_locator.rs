//! Tests for [`RepositoryLocator`] construction and validation.

use rstest::rstest;

use crate::github::{DEFAULT_API_BASE, QueryError, RepositoryLocator};

#[rstest]
fn from_owner_repo_targets_public_api() {
    let locator =
        RepositoryLocator::from_owner_repo("octo", "repo").expect("should create locator");
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
    assert_eq!(locator.full_name(), "octo/repo");
}

#[rstest]
fn builds_list_paths() {
    let locator =
        RepositoryLocator::from_owner_repo("octo", "repo").expect("should create locator");
    assert_eq!(locator.pulls_path(), "/repos/octo/repo/pulls", "pulls path mismatch");
    assert_eq!(
        locator.issue_labels_path(42),
        "/repos/octo/repo/issues/42/labels",
        "labels path mismatch"
    );
}

#[rstest]
fn with_api_base_keeps_enterprise_path() {
    let locator = RepositoryLocator::with_api_base("https://ghe.example.com:8443/api/v3", "foo", "bar")
        .expect("should create enterprise locator");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com:8443/api/v3",
        "enterprise api base should preserve port and path"
    );
}

#[rstest]
#[case::empty_owner("", "repo")]
#[case::empty_repo("octo", "")]
#[case::blank_owner("  ", "repo")]
fn rejects_empty_segment(#[case] owner: &str, #[case] repo: &str) {
    let result = RepositoryLocator::from_owner_repo(owner, repo);
    assert!(
        matches!(result, Err(QueryError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
fn rejects_unparseable_api_base() {
    let result = RepositoryLocator::with_api_base("not a url", "octo", "repo");
    assert!(
        matches!(result, Err(QueryError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}

#[rstest]
#[case::bare_name(Some("octo"), "repo", "octo/repo")]
#[case::qualified_overrides_default(Some("octo"), "other/repo", "other/repo")]
#[case::qualified_without_default(None, "other/repo", "other/repo")]
#[case::surrounding_whitespace(Some("octo"), " repo ", "octo/repo")]
fn resolves_repository_reference(
    #[case] default_owner: Option<&str>,
    #[case] reference: &str,
    #[case] expected: &str,
) {
    let locator = RepositoryLocator::resolve(DEFAULT_API_BASE, default_owner, reference)
        .expect("reference should resolve");
    assert_eq!(locator.full_name(), expected);
}

#[rstest]
#[case::bare_name_without_owner(None, "repo")]
#[case::empty_owner_segment(None, "/repo")]
#[case::empty_name_segment(Some("octo"), "octo/")]
fn rejects_unresolvable_reference(#[case] default_owner: Option<&str>, #[case] reference: &str) {
    let result = RepositoryLocator::resolve(DEFAULT_API_BASE, default_owner, reference);
    assert!(
        matches!(result, Err(QueryError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}
