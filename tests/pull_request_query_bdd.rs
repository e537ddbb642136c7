//! Behavioural tests for filtered pull request queries.

#[path = "pull_request_query_bdd/mod.rs"]
mod pull_request_query_bdd_support;

use pullsift::{QueryError, QueryResult};
use pullsift::github::models::test_support::pull_request_json;
use pull_request_query_bdd_support::{
    QueryState, ensure_runtime_and_server, mount_labels, mount_pulls, run_query, split_list,
    unquote,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn query_state() -> QueryState {
    QueryState::default()
}

fn add_pull_request(query_state: &QueryState, number: u64, title: &str, labels: &str) {
    let runtime = ensure_runtime_and_server(query_state);
    let names = split_list(labels);
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut pulls = query_state.pulls.take().unwrap_or_default();
    pulls.push(pull_request_json(number, unquote(title)));

    query_state
        .server
        .with_ref(|server| mount_labels(&runtime, server, number, &name_refs))
        .unwrap_or_else(|| panic!("mock server not initialised"));

    query_state.pulls.set(pulls);
}

#[given(
    "a GitHub repository owner/repo with pull request {number:u64} titled {title} labelled {labels}"
)]
fn seed_repository(query_state: &QueryState, number: u64, title: String, labels: String) {
    add_pull_request(query_state, number, &title, &labels);
}

#[given("pull request {number:u64} titled {title} labelled {labels}")]
fn seed_pull_request(query_state: &QueryState, number: u64, title: String, labels: String) {
    add_pull_request(query_state, number, &title, &labels);
}

#[given("a personal access token {token}")]
fn remember_token(query_state: &QueryState, token: String) {
    query_state.token.set(token);
}

#[given("the label pattern {pattern}")]
fn remember_label_pattern(query_state: &QueryState, pattern: String) {
    query_state.label_pattern.set(unquote(&pattern).to_owned());
}

#[given("the title pattern {pattern}")]
fn remember_title_pattern(query_state: &QueryState, pattern: String) {
    query_state.title_pattern.set(unquote(&pattern).to_owned());
}

#[when("the pull request query runs")]
fn execute_query(query_state: &QueryState) {
    let runtime = ensure_runtime_and_server(query_state);
    let pulls = query_state.pulls.get().unwrap_or_default();
    query_state
        .server
        .with_ref(|server| mount_pulls(&runtime, server, &pulls))
        .unwrap_or_else(|| panic!("mock server not initialised"));

    match run_query(query_state) {
        Ok(result) => {
            let _had_previous_error = query_state.error.take().is_some();
            query_state.result.set(result);
        }
        Err(error) => {
            let _had_previous_result = query_state.result.take().is_some();
            query_state.error.set(error);
        }
    }
}

#[then("the result contains pull requests {numbers}")]
fn assert_numbers(query_state: &QueryState, numbers: String) {
    let actual = query_state
        .result
        .with_ref(|result| {
            result
                .pulls
                .iter()
                .map(|pull| pull.number.clone())
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|| panic!("query result missing"));

    assert_eq!(actual, split_list(&numbers), "included pull requests mismatch");
}

#[then("the result is empty")]
fn assert_empty(query_state: &QueryState) {
    let count = query_state
        .result
        .with_ref(QueryResult::len)
        .unwrap_or_else(|| panic!("query result missing"));

    assert_eq!(count, 0, "expected no pull requests");
}

#[then("the aggregate id is {id}")]
fn assert_aggregate_id(query_state: &QueryState, id: String) {
    let actual = query_state
        .result
        .with_ref(|result| result.id.to_string())
        .unwrap_or_else(|| panic!("query result missing"));

    assert_eq!(actual, id.trim(), "aggregate id mismatch");
}

#[then("pull request {number} carries labels {labels}")]
fn assert_labels(query_state: &QueryState, number: String, labels: String) {
    let actual = query_state
        .result
        .with_ref(|result| {
            result
                .pulls
                .iter()
                .find(|pull| pull.number == number.trim())
                .map(|pull| pull.labels.iter().map(str::to_owned).collect::<Vec<_>>())
        })
        .unwrap_or_else(|| panic!("query result missing"))
        .unwrap_or_else(|| panic!("pull request {number} not in result"));

    assert_eq!(actual, split_list(&labels), "labels mismatch");
}

#[then("the query fails with an invalid {field} pattern")]
fn assert_invalid_pattern(query_state: &QueryState, field: String) {
    let error = query_state
        .error
        .with_ref(Clone::clone)
        .unwrap_or_else(|| panic!("expected a query error"));

    match error {
        QueryError::InvalidPattern {
            field: actual_field,
            ..
        } => assert_eq!(actual_field, field.trim(), "pattern field mismatch"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[then("no request reached GitHub")]
fn assert_no_requests(query_state: &QueryState) {
    let runtime = ensure_runtime_and_server(query_state);
    let requests = query_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .unwrap_or_else(|| panic!("mock server not initialised"))
        .unwrap_or_default();

    assert!(requests.is_empty(), "unexpected requests: {requests:?}");
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 0)]
fn label_pattern_keeps_matching(query_state: QueryState) {
    let _ = query_state;
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 1)]
fn title_pattern_keeps_matching(query_state: QueryState) {
    let _ = query_state;
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 2)]
fn unmatched_label_pattern_is_empty(query_state: QueryState) {
    let _ = query_state;
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 3)]
fn unmatched_title_pattern_is_empty(query_state: QueryState) {
    let _ = query_state;
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 4)]
fn no_patterns_keep_everything(query_state: QueryState) {
    let _ = query_state;
}

#[scenario(path = "tests/features/pull_request_query.feature", index = 5)]
fn malformed_pattern_is_rejected(query_state: QueryState) {
    let _ = query_state;
}
