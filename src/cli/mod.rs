//! CLI handlers.
//!
//! - [`query`]: Run a filtered pull request query
//! - [`output`]: Text, JSON and schema writers

pub mod output;
pub mod query;
