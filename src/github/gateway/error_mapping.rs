//! Classifies Octocrab failures into [`QueryError`] variants.
//!
//! Rate limit refusals are kept apart because the gateway enriches them with
//! the current quota before reporting.

use http::StatusCode;

use crate::github::error::QueryError;

/// How a failed request should be reported.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Failure {
    /// GitHub refused the request because the quota is used up.
    RateLimited {
        /// `operation failed: <GitHub message>`.
        message: String,
    },
    /// Any other failure, already mapped.
    Mapped(QueryError),
}

pub(super) fn classify(operation: &str, error: &octocrab::Error) -> Failure {
    match error {
        octocrab::Error::GitHub { source, .. } => classify_response(
            operation,
            source.status_code,
            &source.message,
            source.documentation_url.as_deref(),
        ),
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => Failure::Mapped(QueryError::Network {
            message: format!("{operation} failed: {error}"),
        }),
        _ => Failure::Mapped(QueryError::Api {
            message: format!("{operation} failed: {error}"),
        }),
    }
}

fn classify_response(
    operation: &str,
    status: StatusCode,
    message: &str,
    documentation_url: Option<&str>,
) -> Failure {
    if is_rate_limit(status, message, documentation_url) {
        return Failure::RateLimited {
            message: format!("{operation} failed: {message}"),
        };
    }

    let detail = format!("{operation} failed with status {status}: {message}");
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        Failure::Mapped(QueryError::Authentication { message: detail })
    } else {
        Failure::Mapped(QueryError::Api { message: detail })
    }
}

/// GitHub signals quota exhaustion with 403 or 429 plus a rate limit message
/// or documentation link.
fn is_rate_limit(status: StatusCode, message: &str, documentation_url: Option<&str>) -> bool {
    matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
        && (message.to_lowercase().contains("rate limit")
            || documentation_url.is_some_and(|url| url.contains("rate-limit")))
}
