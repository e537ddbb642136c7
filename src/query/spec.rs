//! Validated description of a single pull request query.

use crate::github::error::QueryError;
use crate::github::gateway::PullRequestState;
use crate::github::locator::RepositoryLocator;

use super::filter::PullRequestFilter;

/// Repository, state and compiled filters for one query.
///
/// Built through [`QuerySpec::builder`]; building fails before any network
/// access when a pattern does not compile.
///
/// # Example
///
/// ```
/// use pullsift::RepositoryLocator;
/// use pullsift::github::PullRequestState;
/// use pullsift::query::QuerySpec;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
///     .expect("should build repository locator");
/// let spec = QuerySpec::builder(locator)
///     .state(PullRequestState::Closed)
///     .title_pattern("^Fix")
///     .build()
///     .expect("pattern should compile");
/// assert_eq!(spec.state(), PullRequestState::Closed);
/// ```
#[derive(Debug, Clone)]
pub struct QuerySpec {
    locator: RepositoryLocator,
    state: PullRequestState,
    filter: PullRequestFilter,
}

impl QuerySpec {
    /// Starts a query against `locator` with open state and no filters.
    #[must_use]
    pub const fn builder(locator: RepositoryLocator) -> QuerySpecBuilder {
        QuerySpecBuilder {
            locator,
            state: PullRequestState::Open,
            label_pattern: None,
            title_pattern: None,
        }
    }

    /// Repository being queried.
    #[must_use]
    pub const fn locator(&self) -> &RepositoryLocator {
        &self.locator
    }

    /// State filter sent to GitHub.
    #[must_use]
    pub const fn state(&self) -> PullRequestState {
        self.state
    }

    /// Compiled title and label predicates.
    #[must_use]
    pub const fn filter(&self) -> &PullRequestFilter {
        &self.filter
    }
}

/// Builder for [`QuerySpec`].
#[derive(Debug, Clone)]
pub struct QuerySpecBuilder {
    locator: RepositoryLocator,
    state: PullRequestState,
    label_pattern: Option<String>,
    title_pattern: Option<String>,
}

impl QuerySpecBuilder {
    /// Sets the state filter.
    #[must_use]
    pub const fn state(mut self, state: PullRequestState) -> Self {
        self.state = state;
        self
    }

    /// Requires at least one label to match `pattern`; an empty pattern sets no
    /// requirement.
    #[must_use]
    pub fn label_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.label_pattern = Some(pattern.into());
        self
    }

    /// Requires the title to match `pattern`.
    #[must_use]
    pub fn title_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.title_pattern = Some(pattern.into());
        self
    }

    /// Compiles the patterns and produces the query.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPattern`] when a pattern does not compile.
    pub fn build(self) -> Result<QuerySpec, QueryError> {
        let filter = PullRequestFilter::compile(
            self.label_pattern.as_deref(),
            self.title_pattern.as_deref(),
        )?;
        Ok(QuerySpec {
            locator: self.locator,
            state: self.state,
            filter,
        })
    }
}
