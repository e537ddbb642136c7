//! Query configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.pullsift.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PULLSIFT_REPO`, `PULLSIFT_TOKEN`, or legacy
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repo`/`-r`, `--token`/`-t` and friends
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! state = "all"
//! label_regexp = "^type: (bug|regression)$"
//! title_regexp = "^Fix"
//! ```

use std::env;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::QueryError;
use crate::github::gateway::PullRequestState;
use crate::github::locator::{DEFAULT_API_BASE, PersonalAccessToken, RepositoryLocator};
use crate::query::QuerySpec;
use crate::query::schema::DEFAULT_STATE;

/// Configuration for a single pull request query.
///
/// # Environment Variables
///
/// - `PULLSIFT_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `PULLSIFT_OWNER` or `--owner`: Default repository owner
/// - `PULLSIFT_REPO` or `--repo`: Repository as `name` or `owner/name`
/// - `PULLSIFT_API_BASE` or `--api-base`: GitHub API endpoint
/// - `PULLSIFT_STATE` or `--state`: `open`, `closed` or `all`
/// - `PULLSIFT_LABEL_REGEXP` / `PULLSIFT_TITLE_REGEXP`: Filter patterns
///
/// # Example
///
/// ```no_run
/// use pullsift::PullsiftConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PullsiftConfig::load().expect("failed to load configuration");
/// let spec = config.query_spec().expect("invalid query");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PULLSIFT",
    discovery(
        dotfile_name = ".pullsift.toml",
        config_file_name = "pullsift.toml",
        app_name = "pullsift"
    )
)]
pub struct PullsiftConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PULLSIFT_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Owner used when `repo` is a bare name (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository to query, as `name` or `owner/name`.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// GitHub REST API endpoint.
    ///
    /// Point this at `https://<host>/api/v3` for GitHub Enterprise.
    #[ortho_config()]
    pub api_base: String,

    /// Pull request state to list: `open`, `closed` or `all`.
    #[ortho_config(cli_short = 's')]
    pub state: String,

    /// Keeps pull requests with at least one label matching this pattern.
    #[ortho_config(cli_short = 'l')]
    pub label_regexp: Option<String>,

    /// Keeps pull requests whose title matches this pattern.
    #[ortho_config(cli_short = 'T')]
    pub title_regexp: Option<String>,

    /// Writes the result as JSON instead of a text summary.
    #[ortho_config(cli_short = 'j')]
    pub json: bool,

    /// Emits a structured telemetry event to stderr when the query completes.
    ///
    /// Note: Environment variable `PULLSIFT_TELEMETRY` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub telemetry: bool,

    /// Prints the data source schema and exits without querying GitHub.
    #[ortho_config()]
    pub describe_schema: bool,
}

impl Default for PullsiftConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            state: DEFAULT_STATE.to_owned(),
            label_regexp: None,
            title_regexp: None,
            json: false,
            telemetry: false,
            describe_schema: false,
        }
    }
}

impl PullsiftConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingToken`] when no token source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, QueryError> {
        let value = self
            .token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(QueryError::MissingToken)?;
        PersonalAccessToken::new(value)
    }

    /// Resolves `repo` (and `owner` for bare names) against `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::MissingRepository`] when no repository is
    /// configured, [`QueryError::MissingPathSegments`] when the owner cannot
    /// be determined and [`QueryError::InvalidUrl`] for a bad `api_base`.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, QueryError> {
        let reference = self
            .repo
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(QueryError::MissingRepository)?;
        RepositoryLocator::resolve(&self.api_base, self.owner.as_deref(), reference)
    }

    /// Parses the configured state.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidState`] for anything other than `open`,
    /// `closed` or `all`.
    pub fn pull_request_state(&self) -> Result<PullRequestState, QueryError> {
        PullRequestState::from_str(&self.state)
    }

    /// Builds a validated query from the configuration.
    ///
    /// Patterns are compiled here, so a malformed pattern is reported before
    /// any client is constructed.
    ///
    /// # Errors
    ///
    /// Returns any repository, state or pattern validation error.
    pub fn query_spec(&self) -> Result<QuerySpec, QueryError> {
        let mut builder = QuerySpec::builder(self.repository_locator()?)
            .state(self.pull_request_state()?);
        if let Some(pattern) = &self.label_regexp {
            builder = builder.label_pattern(pattern.as_str());
        }
        if let Some(pattern) = &self.title_regexp {
            builder = builder.title_pattern(pattern.as_str());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests;
