//! Output records produced by a query.

use serde::Serialize;

use crate::github::models::{GitReference, LabelSet, PullRequest};

use super::fingerprint::AggregateId;

/// Flattened view of one included pull request.
///
/// Every field is a string; values GitHub omitted (for example the head
/// repository of a deleted fork) become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestRecord {
    /// Pull request number in decimal.
    pub number: String,
    /// State reported by GitHub.
    pub state: String,
    /// Title.
    pub title: String,
    /// Author login.
    pub user_login: String,
    /// `owner:branch` label of the head.
    pub head_label: String,
    /// Head branch name.
    pub head_ref: String,
    /// Head commit SHA.
    pub head_sha: String,
    /// Repository holding the head branch.
    pub head_repo_name: String,
    /// `owner:branch` label of the base.
    pub base_label: String,
    /// Base branch name.
    pub base_ref: String,
    /// Base commit SHA.
    pub base_sha: String,
    /// Repository holding the base branch.
    pub base_repo_name: String,
    /// Label names in the order GitHub returned them.
    pub labels: LabelSet,
}

impl PullRequestRecord {
    /// Flattens a listed pull request and its resolved labels.
    #[must_use]
    pub fn new(pull: PullRequest, labels: LabelSet) -> Self {
        let PullRequest {
            number,
            state,
            title,
            author,
            head,
            base,
        } = pull;
        let (head_label, head_ref, head_sha, head_repo_name) = flatten(head);
        let (base_label, base_ref, base_sha, base_repo_name) = flatten(base);

        Self {
            number: number.to_string(),
            state: state.unwrap_or_default(),
            title: title.unwrap_or_default(),
            user_login: author.unwrap_or_default(),
            head_label,
            head_ref,
            head_sha,
            head_repo_name,
            base_label,
            base_ref,
            base_sha,
            base_repo_name,
            labels,
        }
    }
}

fn flatten(reference: GitReference) -> (String, String, String, String) {
    (
        reference.label.unwrap_or_default(),
        reference.git_ref.unwrap_or_default(),
        reference.sha.unwrap_or_default(),
        reference.repo_name.unwrap_or_default(),
    )
}

/// Included pull requests in processing order plus their aggregate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// Identifier derived from the included pull request numbers.
    pub id: AggregateId,
    /// Included pull requests.
    pub pulls: Vec<PullRequestRecord>,
    /// Number of pull requests listed before filtering.
    #[serde(skip)]
    pub examined: usize,
}

impl QueryResult {
    /// Number of included pull requests.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pulls.len()
    }

    /// Returns true when no pull request passed the filters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pulls.is_empty()
    }
}
