//! Complete listing of a repository's pull requests.

use async_trait::async_trait;

use super::error::QueryError;
use super::gateway::{ListPullRequestsParams, PullRequestGateway, PullRequestState};
use super::locator::RepositoryLocator;
use super::models::PullRequest;
use super::pagination::{PageResponse, PageSource};

/// Page source over a repository's pull requests in one state.
pub struct PullRequestPages<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    gateway: &'client Gateway,
    locator: &'client RepositoryLocator,
    state: PullRequestState,
}

impl<'client, Gateway> PullRequestPages<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Creates a page source listing pull requests in `state`.
    #[must_use]
    pub const fn new(
        gateway: &'client Gateway,
        locator: &'client RepositoryLocator,
        state: PullRequestState,
    ) -> Self {
        Self {
            gateway,
            locator,
            state,
        }
    }
}

#[async_trait]
impl<Gateway> PageSource for PullRequestPages<'_, Gateway>
where
    Gateway: PullRequestGateway,
{
    type Item = PullRequest;

    async fn fetch_page(
        &self,
        page: u32,
        per_page: u8,
    ) -> Result<PageResponse<PullRequest>, QueryError> {
        let params = ListPullRequestsParams {
            state: self.state,
            page,
            per_page,
        };
        self.gateway.list_pull_requests(self.locator, &params).await
    }
}
