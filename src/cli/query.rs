//! Filtered pull request query operation.

use std::io::{self, Write};

use pullsift::github::{OctocrabPullRequestGateway, PersonalAccessToken, PullRequestGateway};
use pullsift::query::PullRequestQuery;
use pullsift::telemetry::{JsonlTelemetrySink, NoopTelemetrySink, TelemetryEvent, TelemetrySink};
use pullsift::{PullsiftConfig, QueryError, RepositoryLocator};

use super::output::{write_json_to, write_text_summary_to};

/// Runs the configured query against GitHub and writes the result to stdout.
///
/// # Errors
///
/// Returns configuration and pattern errors before any request is made, and
/// the first GitHub failure otherwise.
pub async fn run(config: &PullsiftConfig) -> Result<(), QueryError> {
    let mut stdout = io::stdout().lock();
    let sink: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(JsonlTelemetrySink::stderr())
    } else {
        Box::new(NoopTelemetrySink)
    };
    run_with_gateway_builder(
        config,
        OctocrabPullRequestGateway::for_token,
        sink.as_ref(),
        &mut stdout,
    )
    .await
}

/// Runs the query using a custom gateway builder.
///
/// This function is exposed for testing with scripted gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &PullsiftConfig,
    build_gateway: F,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), QueryError>
where
    G: PullRequestGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, QueryError>,
    W: Write,
{
    let spec = config.query_spec()?;
    let token = config.resolve_token()?;
    let gateway = build_gateway(&token, spec.locator())?;

    let result = match PullRequestQuery::new(&gateway).run(&spec).await {
        Ok(result) => result,
        Err(error) => {
            telemetry.record(TelemetryEvent::failed(&spec, &error));
            return Err(error);
        }
    };
    telemetry.record(TelemetryEvent::completed(&spec, &result));

    if config.json {
        write_json_to(writer, &result)
    } else {
        write_text_summary_to(writer, &result)
    }
}
