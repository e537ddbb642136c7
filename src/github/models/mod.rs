//! Pull request and label data returned by the GitHub API.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public domain types. The listing endpoint does not carry labels;
//! they are resolved separately into a [`LabelSet`].

use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitReference {
    /// `owner:branch` label.
    pub label: Option<String>,
    /// Branch name.
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Commit SHA at the tip of the reference.
    pub sha: Option<String>,
    /// Name of the repository holding the reference; absent for deleted forks.
    pub repo_name: Option<String>,
}

/// Pull request as returned by the repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number, unique within the repository.
    pub number: u64,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Source branch.
    pub head: GitReference,
    /// Target branch.
    pub base: GitReference,
}

/// Ordered label names resolved for a single pull request.
///
/// Order is whatever GitHub returned; names are neither sorted nor
/// de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Wraps label names in the order given.
    #[must_use]
    pub const fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Iterates label names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of labels.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the pull request carries no labels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the label names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) state: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) head: Option<ApiGitReference>,
    pub(crate) base: Option<ApiGitReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiGitReference {
    pub(crate) label: Option<String>,
    #[serde(rename = "ref")]
    pub(crate) git_ref: Option<String>,
    pub(crate) sha: Option<String>,
    pub(crate) repo: Option<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

impl From<ApiGitReference> for GitReference {
    fn from(value: ApiGitReference) -> Self {
        Self {
            label: value.label,
            git_ref: value.git_ref,
            sha: value.sha,
            repo_name: value.repo.and_then(|repo| repo.name),
        }
    }
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            state: value.state,
            title: value.title,
            author: value.user.and_then(|user| user.login),
            head: value.head.map(GitReference::from).unwrap_or_default(),
            base: value.base.map(GitReference::from).unwrap_or_default(),
        }
    }
}

impl From<ApiLabel> for String {
    fn from(value: ApiLabel) -> Self {
        value.name
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::{ApiLabel, ApiPullRequest, LabelSet, PullRequest};

    #[fixture]
    fn listed_pull_request() -> serde_json::Value {
        json!({
            "number": 7,
            "state": "open",
            "title": "Add label filtering",
            "user": { "login": "octocat" },
            "head": {
                "label": "octocat:feature",
                "ref": "feature",
                "sha": "aaa111",
                "repo": { "name": "fork" }
            },
            "base": {
                "label": "owner:main",
                "ref": "main",
                "sha": "bbb222",
                "repo": { "name": "repo" }
            }
        })
    }

    #[rstest]
    fn api_pull_request_converts_head_and_base(listed_pull_request: serde_json::Value) {
        let api: ApiPullRequest =
            serde_json::from_value(listed_pull_request).expect("pull request should deserialise");
        let pull: PullRequest = api.into();

        assert_eq!(pull.number, 7);
        assert_eq!(pull.author.as_deref(), Some("octocat"));
        assert_eq!(pull.head.label.as_deref(), Some("octocat:feature"));
        assert_eq!(pull.head.git_ref.as_deref(), Some("feature"));
        assert_eq!(pull.head.sha.as_deref(), Some("aaa111"));
        assert_eq!(pull.head.repo_name.as_deref(), Some("fork"));
        assert_eq!(pull.base.git_ref.as_deref(), Some("main"));
        assert_eq!(pull.base.repo_name.as_deref(), Some("repo"));
    }

    #[rstest]
    fn deleted_fork_leaves_head_repo_name_empty() {
        let value = json!({
            "number": 8,
            "head": { "label": "ghost:fix", "ref": "fix", "sha": "ccc333", "repo": null }
        });

        let pull: PullRequest = serde_json::from_value::<ApiPullRequest>(value)
            .expect("pull request should deserialise")
            .into();

        assert!(pull.head.repo_name.is_none());
        assert_eq!(pull.head.sha.as_deref(), Some("ccc333"));
        assert_eq!(pull.base, Default::default());
        assert!(pull.title.is_none());
    }

    #[rstest]
    fn api_label_keeps_only_the_name() {
        let label: ApiLabel = serde_json::from_value(json!({
            "id": 208045946,
            "name": "bug",
            "color": "f29513",
            "default": true
        }))
        .expect("label should deserialise");

        assert_eq!(String::from(label), "bug");
    }

    #[rstest]
    fn label_set_preserves_order_and_duplicates() {
        let labels = LabelSet::new(vec!["b".to_owned(), "a".to_owned(), "b".to_owned()]);

        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(labels.len(), 3);
        assert!(!labels.is_empty());
    }
}
