//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use pullsift::QueryError;
use pullsift::query::{PullRequestRecord, QueryResult, data_source_schema};

/// Writes one line per included pull request followed by the aggregate id.
pub fn write_text_summary_to<W: Write>(
    writer: &mut W,
    result: &QueryResult,
) -> Result<(), QueryError> {
    for pull in &result.pulls {
        writeln!(writer, "{}", record_line(pull)).map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Aggregate id: {}", result.id).map_err(|e| io_error(&e))
}

/// Writes the result as pretty-printed JSON.
pub fn write_json_to<W: Write>(writer: &mut W, result: &QueryResult) -> Result<(), QueryError> {
    serde_json::to_writer_pretty(&mut *writer, result).map_err(|error| QueryError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the data source schema as pretty-printed JSON.
pub fn write_schema_to<W: Write>(writer: &mut W) -> Result<(), QueryError> {
    serde_json::to_writer_pretty(&mut *writer, &data_source_schema()).map_err(|error| {
        QueryError::Io {
            message: error.to_string(),
        }
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn record_line(pull: &PullRequestRecord) -> String {
    let title = if pull.title.is_empty() {
        "(no title)"
    } else {
        pull.title.as_str()
    };
    let labels = pull.labels.as_slice().join(", ");
    format!(
        "#{number} [{state}] {title} (@{author}) {head} -> {base} labels: [{labels}]",
        number = pull.number,
        state = pull.state,
        author = pull.user_login,
        head = pull.head_label,
        base = pull.base_label,
    )
}

fn io_error(error: &io::Error) -> QueryError {
    QueryError::Io {
        message: error.to_string(),
    }
}
