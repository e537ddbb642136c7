//! Query orchestration: list, enrich with labels, filter, fingerprint.
//!
//! Pull requests are processed one at a time in listing order. Each one has
//! its labels resolved before the filter runs, so label requests are issued
//! for pull requests that the title filter later rejects. Any failure aborts
//! the query and discards everything gathered so far.

use crate::github::error::QueryError;
use crate::github::gateway::PullRequestGateway;
use crate::github::labels::resolve_labels;
use crate::github::listing::PullRequestPages;
use crate::github::pagination::{PER_PAGE, fetch_all_pages};

use super::filter::FilterDecision;
use super::fingerprint::Fingerprint;
use super::result::{PullRequestRecord, QueryResult};
use super::spec::QuerySpec;

/// Runs pull request queries through a gateway.
pub struct PullRequestQuery<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    gateway: &'client Gateway,
}

impl<'client, Gateway> PullRequestQuery<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Creates a query runner borrowing `gateway`.
    #[must_use]
    pub const fn new(gateway: &'client Gateway) -> Self {
        Self { gateway }
    }

    /// Executes `spec` and returns the included pull requests with their
    /// aggregate identifier.
    ///
    /// # Errors
    ///
    /// Returns the first listing or label failure. No partial result is
    /// produced.
    pub async fn run(&self, spec: &QuerySpec) -> Result<QueryResult, QueryError> {
        let locator = spec.locator();
        let listing = PullRequestPages::new(self.gateway, locator, spec.state());
        let listed = fetch_all_pages(&listing, PER_PAGE).await?;
        let examined = listed.len();
        tracing::debug!(
            repository = %locator.full_name(),
            state = %spec.state(),
            examined,
            "listed pull requests"
        );

        let mut fingerprint = Fingerprint::new();
        let mut pulls = Vec::new();
        for pull in listed {
            let number = pull.number;
            let labels = resolve_labels(self.gateway, locator, number).await?;
            let title = pull.title.as_deref().unwrap_or_default();

            match spec.filter().evaluate(title, &labels) {
                FilterDecision::Include => {
                    fingerprint.record(number);
                    pulls.push(PullRequestRecord::new(pull, labels));
                }
                decision => {
                    tracing::debug!(number, ?decision, "skipping pull request");
                }
            }
        }

        let id = fingerprint.finish();
        tracing::debug!(%id, included = pulls.len(), examined, "query complete");
        Ok(QueryResult {
            id,
            pulls,
            examined,
        })
    }
}
