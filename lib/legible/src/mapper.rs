//! Pure mappers from classified failures to [`ErrorRecord`]s.
//!
//! Response mappers all start from the same base: the [`ResponseFields`] of
//! the response, headers already flattened. Category-specific keys are then
//! written on top, so `title`, `status` and `message` always win over
//! anything a body provides.

use legible_core::record::{MESSAGE, STATUS, TITLE};
use legible_core::{ErrorRecord, NativeError, ResponseFields};
use serde_json::Value;

/// Message for native errors without one.
pub const UNKNOWN_NATIVE_MESSAGE: &str = "Unknown JS Error";
/// Title for values that are neither errors nor responses.
pub const UNKNOWN_ERROR_TITLE: &str = "Unknown Error";
/// Generic message for anything that cannot be described better.
pub const GENERIC_MESSAGE: &str = "Something went wrong.";
/// Message for HTML responses.
pub const HTML_MESSAGE: &str = "HTML can not be processed.";
/// Title for text and HTML responses without status text.
pub const RESPONSE_ERROR_TITLE: &str = "Response Error";
/// Title for unclassified responses without status text.
pub const UNKNOWN_RESPONSE_TITLE: &str = "Unknown Response Error";

const BODY_TITLE: &str = "title";
const BODY_EXPLANATION: &str = "explanation";

/// Native error: name (or type tag) and message, no status.
#[must_use]
pub fn map_native(err: &NativeError) -> ErrorRecord {
    ErrorRecord::new(
        err.name().unwrap_or_else(|| err.type_tag()),
        err.message().unwrap_or(UNKNOWN_NATIVE_MESSAGE),
    )
}

/// Fallback for values that are neither errors nor responses.
#[must_use]
pub fn map_unrecognized() -> ErrorRecord {
    ErrorRecord::new(UNKNOWN_ERROR_TITLE, GENERIC_MESSAGE)
}

/// JSON response: body fields overlaid on the response fields.
///
/// `message` is the body's `explanation` as-is, `null` when missing.
/// Non-object bodies contribute nothing but the (absent) explanation.
#[must_use]
pub fn map_json(fields: ResponseFields, body: Value) -> ErrorRecord {
    let status = fields.status;
    let status_text = fields.status_text.clone();

    let body = match body {
        Value::Object(body) => body,
        _ => serde_json::Map::new(),
    };
    let title = body
        .get(BODY_TITLE)
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .map_or(status_text, str::to_string);
    let message = body.get(BODY_EXPLANATION).cloned().unwrap_or(Value::Null);

    base_record(fields)
        .overlay(body)
        .with(TITLE, title)
        .with(STATUS, status)
        .with(MESSAGE, message)
}

/// Text response: the body is the message.
#[must_use]
pub fn map_text(fields: ResponseFields, text: String) -> ErrorRecord {
    finish_response(fields, RESPONSE_ERROR_TITLE, text)
}

/// HTML response: the body is never read.
#[must_use]
pub fn map_html(fields: ResponseFields) -> ErrorRecord {
    finish_response(fields, RESPONSE_ERROR_TITLE, HTML_MESSAGE)
}

/// Response with an unrecognized content type: the body is never read.
#[must_use]
pub fn map_unknown_response(fields: ResponseFields) -> ErrorRecord {
    finish_response(fields, UNKNOWN_RESPONSE_TITLE, GENERIC_MESSAGE)
}

/// Shared base of every response record.
#[must_use]
pub fn base_record(fields: ResponseFields) -> ErrorRecord {
    ErrorRecord::from_fields(fields.into_map())
}

fn finish_response(
    fields: ResponseFields,
    default_title: &str,
    message: impl Into<String>,
) -> ErrorRecord {
    let status = fields.status;
    let message: String = message.into();
    let title = if fields.status_text.is_empty() {
        default_title.to_string()
    } else {
        fields.status_text.clone()
    };

    base_record(fields)
        .with(TITLE, title)
        .with(STATUS, status)
        .with(MESSAGE, message)
}
