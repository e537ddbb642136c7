//! GitHub access for pull request queries.
//!
//! This module wraps Octocrab to list a repository's pull requests and the
//! labels attached to each one. Every list endpoint is walked page by page
//! until GitHub stops advertising a next page. Errors are mapped into
//! [`QueryError`] variants so that callers can surface precise failures
//! without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod labels;
pub mod listing;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod rate_limit;

pub use error::QueryError;
pub use gateway::{
    ListLabelsParams, ListPullRequestsParams, OctocrabPullRequestGateway, PullRequestGateway,
    PullRequestState,
};
pub use labels::resolve_labels;
pub use locator::{
    DEFAULT_API_BASE, PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner,
};
pub use models::{GitReference, LabelSet, PullRequest};
pub use pagination::{PER_PAGE, PageCursor, PageResponse, PageSource, fetch_all_pages};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockPullRequestGateway;

#[cfg(test)]
mod tests;
