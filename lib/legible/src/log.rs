//! Record logging.
//!
//! [`format_record`] renders a record as a multi-line block; a [`LogSink`]
//! decides where that block goes. The default [`TracingSink`] emits it
//! through `tracing`.

use std::fmt::Write as _;

use legible_core::ErrorRecord;
use legible_core::record::{HEADERS, MESSAGE};
use serde_json::Value;
use tracing::info;

/// Destination of formatted log blocks.
pub trait LogSink: Send + Sync {
    /// Emit one formatted block.
    fn emit(&self, record: &ErrorRecord, line: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, _record: &ErrorRecord, line: &str) {
        self(line);
    }
}

/// Sink emitting through `tracing` at info level, target `legible`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &ErrorRecord, line: &str) {
        info!(
            target: "legible",
            title = record.title(),
            status = ?record.status(),
            "{line}"
        );
    }
}

/// Render a record as a log block.
///
/// ```text
/// logging error: <info>
/// 	title: Not Found
/// 	status: 404
/// 	headers: {"content-type":"text/plain"}
/// 	message: some error occurred
/// ```
///
/// Without `info` (or with an empty one) the header is `logging error:`. A
/// null `message` is written as `undefined`.
#[must_use]
pub fn format_record(record: &ErrorRecord, info: Option<&str>) -> String {
    let mut out = String::from("logging error:");
    if let Some(info) = info.filter(|info| !info.is_empty()) {
        let _ = write!(out, " {info}");
    }
    out.push('\n');

    for (key, value) in record.iter() {
        let value = match (key, value) {
            (HEADERS, _) => value.to_string(),
            (MESSAGE, Value::Null) => "undefined".to_string(),
            _ => coerce(value),
        };
        let _ = writeln!(out, "\t{key}: {value}");
    }
    out
}

// String coercion: strings raw, arrays comma-joined, objects opaque.
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
