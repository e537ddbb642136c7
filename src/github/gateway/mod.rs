//! Gateways for listing pull requests and their labels through Octocrab.
//!
//! The [`PullRequestGateway`] trait is the seam between query orchestration
//! and HTTP. Tests substitute the generated mock or a scripted gateway; the
//! Octocrab implementation issues the real requests.

mod error_mapping;
mod repository;
mod types;

pub use repository::OctocrabPullRequestGateway;
pub use types::{ListLabelsParams, ListPullRequestsParams, PullRequestState};

use async_trait::async_trait;

use crate::github::error::QueryError;
use crate::github::locator::RepositoryLocator;
use crate::github::models::PullRequest;
use crate::github::pagination::PageResponse;

/// Gateway exposing the two list endpoints a query consumes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// List one page of pull requests for the repository.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PageResponse<PullRequest>, QueryError>;

    /// List one page of label names attached to a pull request.
    async fn list_issue_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        params: &ListLabelsParams,
    ) -> Result<PageResponse<String>, QueryError>;
}
