//! Query telemetry events and sinks.
//!
//! Events are opt-in and written locally as JSON lines; nothing is
//! transmitted anywhere.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::query::{QueryResult, QuerySpec};

/// A structured telemetry event emitted after a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A query finished and produced a result.
    QueryCompleted {
        /// Repository in `owner/name` form.
        repository: String,
        /// State filter sent to GitHub.
        state: String,
        /// Pull requests listed before filtering.
        examined: usize,
        /// Pull requests that passed the filters.
        included: usize,
        /// Aggregate identifier of the included pull requests.
        aggregate_id: String,
    },
    /// A query was abandoned after an error.
    QueryFailed {
        /// Repository in `owner/name` form.
        repository: String,
        /// Rendered error.
        error: String,
    },
}

impl TelemetryEvent {
    /// Summarises a completed query.
    #[must_use]
    pub fn completed(spec: &QuerySpec, result: &QueryResult) -> Self {
        Self::QueryCompleted {
            repository: spec.locator().full_name(),
            state: spec.state().to_string(),
            examined: result.examined,
            included: result.len(),
            aggregate_id: result.id.to_string(),
        }
    }

    /// Records why a query failed.
    #[must_use]
    pub fn failed(spec: &QuerySpec, error: &impl std::fmt::Display) -> Self {
        Self::QueryFailed {
            repository: spec.locator().full_name(),
            error: error.to_string(),
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Writes each event to `W` as one JSON line (JSONL).
///
/// Write failures are logged at debug level and otherwise ignored so that
/// telemetry never changes the outcome of a query.
#[derive(Debug)]
pub struct JsonlTelemetrySink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonlTelemetrySink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JsonlTelemetrySink<io::Stderr> {
    /// Sink writing to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TelemetrySink for JsonlTelemetrySink<W> {
    fn record(&self, event: TelemetryEvent) {
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(error) => {
                tracing::debug!(%error, "failed to serialise telemetry event");
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = writeln!(writer, "{line}") {
            tracing::debug!(%error, "failed to write telemetry event");
        }
    }
}
