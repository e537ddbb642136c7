//! Builders for pull request fixtures used in tests.
//!
//! # Examples
//!
//! ```
//! use pullsift::github::models::test_support::pull_request;
//!
//! let pull = pull_request(1, "Test");
//! assert_eq!(pull.title.as_deref(), Some("Test"));
//! assert_eq!(pull.head.git_ref.as_deref(), Some("feature-1"));
//! ```

use super::{GitReference, PullRequest};

/// Builds an open pull request with deterministic head and base references.
///
/// The head branch is `feature-{number}` on the `fork` repository and the
/// base branch is `main` on `repo`.
#[must_use]
pub fn pull_request(number: u64, title: &str) -> PullRequest {
    PullRequest {
        number,
        state: Some("open".to_owned()),
        title: Some(title.to_owned()),
        author: Some("octocat".to_owned()),
        head: GitReference {
            label: Some(format!("octocat:feature-{number}")),
            git_ref: Some(format!("feature-{number}")),
            sha: Some(format!("head{number:04}")),
            repo_name: Some("fork".to_owned()),
        },
        base: GitReference {
            label: Some("owner:main".to_owned()),
            git_ref: Some("main".to_owned()),
            sha: Some(format!("base{number:04}")),
            repo_name: Some("repo".to_owned()),
        },
    }
}

/// JSON body for a pull request as the listing endpoint would return it.
#[must_use]
pub fn pull_request_json(number: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "state": "open",
        "title": title,
        "user": { "login": "octocat" },
        "head": {
            "label": format!("octocat:feature-{number}"),
            "ref": format!("feature-{number}"),
            "sha": format!("head{number:04}"),
            "repo": { "name": "fork" }
        },
        "base": {
            "label": "owner:main",
            "ref": "main",
            "sha": format!("base{number:04}"),
            "repo": { "name": "repo" }
        }
    })
}

/// JSON body for a page of issue labels.
#[must_use]
pub fn labels_json(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| serde_json::json!({ "name": name, "color": "ededed" }))
            .collect(),
    )
}
