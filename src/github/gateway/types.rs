//! Request parameter types for gateway operations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::github::error::QueryError;
use crate::github::pagination::PER_PAGE;

/// Pull request state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    /// Only open pull requests.
    #[default]
    Open,
    /// Only closed pull requests.
    Closed,
    /// All pull requests regardless of state.
    All,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

impl FromStr for PullRequestState {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            _ => Err(QueryError::InvalidState {
                value: value.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for listing one page of pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// Filter by state.
    pub state: PullRequestState,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl Default for ListPullRequestsParams {
    fn default() -> Self {
        Self {
            state: PullRequestState::Open,
            page: 1,
            per_page: PER_PAGE,
        }
    }
}

/// Parameters for listing one page of a pull request's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLabelsParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl Default for ListLabelsParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }
}
