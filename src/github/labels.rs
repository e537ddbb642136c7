//! Label resolution for individual pull requests.
//!
//! The repository listing omits labels, so each pull request's labels are
//! read from its issue's label endpoint. Every page is fetched before the
//! set is returned.

use async_trait::async_trait;

use super::error::QueryError;
use super::gateway::{ListLabelsParams, PullRequestGateway};
use super::locator::RepositoryLocator;
use super::models::LabelSet;
use super::pagination::{PER_PAGE, PageResponse, PageSource, fetch_all_pages};

/// Page source over the labels of one pull request.
pub struct IssueLabelPages<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    gateway: &'client Gateway,
    locator: &'client RepositoryLocator,
    number: u64,
}

impl<'client, Gateway> IssueLabelPages<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Creates a page source for the labels of pull request `number`.
    #[must_use]
    pub const fn new(
        gateway: &'client Gateway,
        locator: &'client RepositoryLocator,
        number: u64,
    ) -> Self {
        Self {
            gateway,
            locator,
            number,
        }
    }
}

#[async_trait]
impl<Gateway> PageSource for IssueLabelPages<'_, Gateway>
where
    Gateway: PullRequestGateway,
{
    type Item = String;

    async fn fetch_page(&self, page: u32, per_page: u8) -> Result<PageResponse<String>, QueryError> {
        let params = ListLabelsParams { page, per_page };
        self.gateway
            .list_issue_labels(self.locator, self.number, &params)
            .await
    }
}

/// Resolves the complete, ordered label set of pull request `number`.
///
/// # Errors
///
/// Propagates the first gateway failure on any page; no partial label set is
/// returned.
pub async fn resolve_labels<Gateway>(
    gateway: &Gateway,
    locator: &RepositoryLocator,
    number: u64,
) -> Result<LabelSet, QueryError>
where
    Gateway: PullRequestGateway,
{
    let source = IssueLabelPages::new(gateway, locator, number);
    let names = fetch_all_pages(&source, PER_PAGE).await?;
    tracing::trace!(number, labels = names.len(), "resolved labels");
    Ok(LabelSet::new(names))
}
