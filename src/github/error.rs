//! Error types surfaced by pull request queries.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while validating a query or communicating with GitHub.
///
/// Every variant is terminal for the current query: no partial result is
/// ever returned alongside one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No repository was configured for the query.
    #[error("repository is required")]
    MissingRepository,

    /// The repository owner or name was empty.
    #[error("repository must be given as <name> or <owner>/<name>")]
    MissingPathSegments,

    /// The API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The pull request state filter is not one GitHub understands.
    #[error("state must be one of open, closed or all, got `{value}`")]
    InvalidState {
        /// The rejected state value.
        value: String,
    },

    /// A filter pattern is not a valid regular expression.
    #[error("{field} is not a valid regular expression: {message}")]
    InvalidPattern {
        /// Name of the configuration field holding the pattern.
        field: &'static str,
        /// Compiler diagnostic from the regex engine.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if available from the rate limit endpoint.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
