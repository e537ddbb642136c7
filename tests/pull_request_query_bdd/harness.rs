//! Wiremock helpers for the pull request query BDD tests.

use pullsift::github::models::test_support::labels_json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::state::SharedRuntime;

const PULLS_PATH: &str = "/api/v3/repos/owner/repo/pulls";

fn labels_path(number: u64) -> String {
    format!("/api/v3/repos/owner/repo/issues/{number}/labels")
}

/// Serves `pulls` as the single page of open pull requests.
pub(crate) fn mount_pulls(runtime: &SharedRuntime, server: &MockServer, pulls: &[serde_json::Value]) {
    let mock = Mock::given(method("GET"))
        .and(path(PULLS_PATH))
        .and(query_param("state", "open"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulls));
    runtime.block_on(mock.mount(server));
}

/// Serves `names` as the single page of labels for pull request `number`.
pub(crate) fn mount_labels(runtime: &SharedRuntime, server: &MockServer, number: u64, names: &[&str]) {
    let mock = Mock::given(method("GET"))
        .and(path(labels_path(number)))
        .respond_with(ResponseTemplate::new(200).set_body_json(labels_json(names)));
    runtime.block_on(mock.mount(server));
}

/// Strips the quotes Gherkin arguments are written with.
pub(crate) fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

/// Splits a quoted, comma separated list.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    unquote(value)
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
