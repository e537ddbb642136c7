//! Octocrab-backed gateway for the pull request and issue label listings.

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};

use crate::github::error::QueryError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiLabel, ApiPullRequest, PullRequest};
use crate::github::pagination::PageResponse;
use crate::github::rate_limit::RateLimitInfo;

use super::error_mapping::{Failure, classify};
use super::{ListLabelsParams, ListPullRequestsParams, PullRequestGateway};

/// GitHub caps `per_page` at 100 for every list endpoint.
const MAX_PER_PAGE: u8 = 100;

/// Octocrab-backed pull request gateway.
pub struct OctocrabPullRequestGateway {
    client: Octocrab,
}

impl OctocrabPullRequestGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated Octocrab client rooted at the locator's API
    /// base.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidUrl` when the base URI is rejected or
    /// `QueryError::Configuration` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, QueryError> {
        let base_uri = locator
            .api_base()
            .as_str()
            .parse::<Uri>()
            .map_err(|error| QueryError::InvalidUrl(error.to_string()))?;

        let client = Octocrab::builder()
            .personal_token(token.value())
            .base_uri(base_uri)
            .map_err(|error| QueryError::InvalidUrl(error.to_string()))?
            .build()
            .map_err(|error| QueryError::Configuration {
                message: format!("failed to build GitHub client: {error}"),
            })?;
        Ok(Self::new(client))
    }

    /// Fetches one page from `route` and converts the advertised `next` link
    /// into a page number.
    async fn fetch_page<Api, Item>(
        &self,
        operation: &str,
        route: String,
        query: &[(&str, &str)],
    ) -> Result<PageResponse<Item>, QueryError>
    where
        Api: serde::de::DeserializeOwned + Send,
        Item: From<Api> + Send,
    {
        let page: Page<Api> = match self.client.get(route, Some(query)).await {
            Ok(page) => page,
            Err(error) => return Err(self.report_failure(operation, &error).await),
        };

        let next_page = next_page_number(page.next.as_ref());
        let items = page.items.into_iter().map(Item::from).collect();
        Ok(PageResponse::new(items, next_page))
    }

    async fn report_failure(&self, operation: &str, error: &octocrab::Error) -> QueryError {
        match classify(operation, error) {
            Failure::RateLimited { message } => {
                let rate_limit = self.core_quota().await;
                let detailed = match &rate_limit {
                    Some(info) => format!("{message} ({info})"),
                    None => message,
                };
                tracing::warn!(operation, "GitHub rate limit reached");
                QueryError::RateLimitExceeded {
                    rate_limit,
                    message: detailed,
                }
            }
            Failure::Mapped(mapped) => mapped,
        }
    }

    /// Best-effort read of the core quota; `None` if that request fails too.
    async fn core_quota(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        RateLimitInfo::from_counters(rate.limit, rate.remaining, rate.reset)
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabPullRequestGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PageResponse<PullRequest>, QueryError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let query = [
            ("state", params.state.as_str()),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        self.fetch_page::<ApiPullRequest, PullRequest>("list pulls", locator.pulls_path(), &query)
            .await
    }

    async fn list_issue_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
        params: &ListLabelsParams,
    ) -> Result<PageResponse<String>, QueryError> {
        validate_pagination_params(params.page, params.per_page)?;

        let page = params.page.to_string();
        let per_page = params.per_page.to_string();
        let query = [("page", page.as_str()), ("per_page", per_page.as_str())];

        self.fetch_page::<ApiLabel, String>(
            "list labels",
            locator.issue_labels_path(number),
            &query,
        )
        .await
    }
}

/// Reads the `page` query parameter from a `rel="next"` link.
fn next_page_number(next: Option<&Uri>) -> Option<u32> {
    let query = next?.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), QueryError> {
    if page == 0 {
        return Err(QueryError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(QueryError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(QueryError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}
