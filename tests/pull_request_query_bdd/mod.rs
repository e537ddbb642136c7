//! Support modules for the pull request query BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{mount_labels, mount_pulls, split_list, unquote};
pub(crate) use state::{QueryState, ensure_runtime_and_server, run_query};
