//! Pullsift library crate for filtered GitHub pull request queries.
//!
//! The library wraps Octocrab to list every pull request in a repository,
//! resolve each one's labels, keep those matching optional title and label
//! patterns, and derive an order-sensitive aggregate identifier for the
//! result. Errors surface as [`QueryError`] variants that the CLI can print
//! directly.

pub mod config;
pub mod github;
pub mod query;
pub mod telemetry;

pub use config::PullsiftConfig;
pub use github::{
    OctocrabPullRequestGateway, PersonalAccessToken, PullRequestGateway, QueryError,
    RepositoryLocator,
};
pub use query::{
    AggregateId, DataSourceSchema, PullRequestQuery, PullRequestRecord, QueryResult, QuerySpec,
    data_source_schema,
};
