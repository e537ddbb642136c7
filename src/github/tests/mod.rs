//! Unit tests for repository and token validation.

use rstest::rstest;

use super::{PersonalAccessToken, QueryError};

mod repository_locator;

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn rejects_blank_token(#[case] token: &str) {
    let result = PersonalAccessToken::new(token);
    assert!(
        matches!(result, Err(QueryError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn trims_token() {
    let token = PersonalAccessToken::new("  ghp_example \n").expect("token should be valid");
    assert_eq!(token.value(), "ghp_example", "token should be trimmed");
    assert_eq!(token.as_ref(), "ghp_example");
}
