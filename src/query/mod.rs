//! Pull request queries: filtering, aggregation and the data source schema.

mod aggregate;
pub mod filter;
pub mod fingerprint;
mod result;
pub mod schema;
mod spec;

pub use aggregate::PullRequestQuery;
pub use filter::{FilterDecision, PullRequestFilter};
pub use fingerprint::{AggregateId, Fingerprint};
pub use result::{PullRequestRecord, QueryResult};
pub use schema::{DataSourceSchema, FieldDescriptor, data_source_schema};
pub use spec::{QuerySpec, QuerySpecBuilder};
