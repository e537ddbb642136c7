//! Scenario state and query execution for the pull request query BDD tests.

use std::cell::RefCell;
use std::rc::Rc;

use pullsift::github::OctocrabPullRequestGateway;
use pullsift::{PullRequestQuery, PullsiftConfig, QueryError, QueryResult};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Tokio runtime shared between the steps of one scenario.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct QueryState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) pulls: Slot<Vec<serde_json::Value>>,
    pub(crate) token: Slot<String>,
    pub(crate) label_pattern: Slot<String>,
    pub(crate) title_pattern: Slot<String>,
    pub(crate) result: Slot<QueryResult>,
    pub(crate) error: Slot<QueryError>,
}

/// Starts the runtime and mock GitHub server on first use.
pub(crate) fn ensure_runtime_and_server(query_state: &QueryState) -> SharedRuntime {
    if query_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        query_state
            .runtime
            .set(SharedRuntime(Rc::new(RefCell::new(runtime))));
    }

    let shared_runtime = query_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if query_state.server.with_ref(|_| ()).is_none() {
        query_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Runs the configured query against the mock server.
pub(crate) fn run_query(query_state: &QueryState) -> Result<QueryResult, QueryError> {
    let server_url = query_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| QueryError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let runtime = query_state.runtime.get().ok_or_else(|| QueryError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    let config = PullsiftConfig {
        token: query_state.token.get(),
        repo: Some("owner/repo".to_owned()),
        api_base: format!("{server_url}/api/v3"),
        label_regexp: query_state.label_pattern.get(),
        title_regexp: query_state.title_pattern.get(),
        ..Default::default()
    };

    runtime.block_on(async {
        let spec = config.query_spec()?;
        let token = config.resolve_token()?;
        let gateway = OctocrabPullRequestGateway::for_token(&token, spec.locator())?;
        PullRequestQuery::new(&gateway).run(&spec).await
    })
}
