//! Repository identity wrappers and API path construction.

use url::Url;

use super::error::QueryError;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, QueryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(QueryError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, QueryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(QueryError::MissingPathSegments);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, QueryError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QueryError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// A repository on a GitHub host, together with the API base used to reach it.
///
/// # Example
///
/// ```
/// use pullsift::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("octo", "repo")
///     .expect("should build repository locator");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a repository on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, QueryError> {
        Self::with_api_base(DEFAULT_API_BASE, owner, repo)
    }

    /// Creates a locator for a repository reached through `api_base`.
    ///
    /// Use this for GitHub Enterprise (`https://ghe.example.com/api/v3`) or
    /// for local test servers.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidUrl` when `api_base` cannot be parsed and
    /// `QueryError::MissingPathSegments` when owner or repo is empty.
    pub fn with_api_base(api_base: &str, owner: &str, repo: &str) -> Result<Self, QueryError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let parsed_base =
            Url::parse(api_base).map_err(|error| QueryError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base: parsed_base,
            owner: validated_owner,
            repository,
        })
    }

    /// Resolves a repository reference of the form `name` or `owner/name`.
    ///
    /// A bare name is paired with `default_owner`; an explicit owner in the
    /// reference wins over the default.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingPathSegments` when no owner can be
    /// determined or either segment is empty.
    pub fn resolve(
        api_base: &str,
        default_owner: Option<&str>,
        reference: &str,
    ) -> Result<Self, QueryError> {
        match reference.trim().split_once('/') {
            Some((owner, repo)) => Self::with_api_base(api_base, owner, repo),
            None => {
                let owner = default_owner.ok_or(QueryError::MissingPathSegments)?;
                Self::with_api_base(api_base, owner, reference)
            }
        }
    }

    /// API base URL used for requests against this repository.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// `owner/name` form used in logs and summaries.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!(
            "/repos/{}/{}/pulls",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    /// Labels live on the issue that backs each pull request.
    pub(crate) fn issue_labels_path(&self, number: u64) -> String {
        format!(
            "/repos/{}/{}/issues/{number}/labels",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}
