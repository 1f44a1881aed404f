//! Response-like values.
//!
//! [`ResponseLike`] is the contract a failed HTTP response has to fulfil to be
//! turned into a readable record: status, headers, a typed set of
//! [`ResponseFields`], duplication, and single-use body readers.
//!
//! [`Response`] is the buffered implementation shipped with this crate.
//!
//! # Example
//!
//! ```
//! use legible_core::{Response, ResponseLike};
//!
//! let response = Response::builder(404)
//!     .header("Content-Type", "text/plain")
//!     .body("some error occurred")
//!     .build()
//!     .expect("valid response");
//!
//! assert_eq!(response.status_text(), "Not Found");
//! assert_eq!(response.content_type(), Some("text/plain"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;
use std::future::Future;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

// ============================================================================
// ResponseLike Trait
// ============================================================================

/// An HTTP response whose body can be read at most once per copy.
///
/// Body readers take `self`: read from a [`duplicate`](Self::duplicate) when
/// the original must stay readable.
pub trait ResponseLike: Send + Sync + Sized {
    /// HTTP status code.
    fn status(&self) -> u16;

    /// Status text (reason phrase); may be empty.
    fn status_text(&self) -> &str;

    /// Response headers, looked up case-insensitively.
    fn headers(&self) -> &HeaderMap;

    /// Final URL of the response; empty when unknown.
    fn url(&self) -> &str {
        ""
    }

    /// Whether the response is the result of a redirect.
    fn redirected(&self) -> bool {
        false
    }

    /// `Content-Type` header value, if present and printable.
    fn content_type(&self) -> Option<&str> {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    /// Properties carried into a readable record.
    fn fields(&self) -> ResponseFields {
        ResponseFields::capture(self)
    }

    /// Independent copy with its own unread body.
    #[must_use]
    fn duplicate(&self) -> Self;

    /// Read and parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not valid JSON.
    fn read_json(self) -> impl Future<Output = Result<Value>> + Send;

    /// Read the body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not valid UTF-8.
    fn read_text(self) -> impl Future<Output = Result<String>> + Send;
}

// ============================================================================
// Response Fields
// ============================================================================

/// The response properties a readable record may carry.
///
/// Serialized with the usual fetch names (`statusText`), in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseFields {
    /// Final URL.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Status text.
    pub status_text: String,
    /// Status is 2xx.
    pub ok: bool,
    /// Response followed a redirect.
    pub redirected: bool,
    /// Headers flattened to name → value.
    pub headers: BTreeMap<String, String>,
}

impl ResponseFields {
    /// Capture the fields of a response.
    #[must_use]
    pub fn capture<R: ResponseLike>(response: &R) -> Self {
        let status = response.status();
        Self {
            url: response.url().to_string(),
            status,
            status_text: response.status_text().to_string(),
            ok: (200..300).contains(&status),
            redirected: response.redirected(),
            headers: flatten_headers(response.headers()),
        }
    }

    /// Ordered mapping, ready to seed an [`crate::ErrorRecord`].
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        let headers = self
            .headers
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect::<Map<_, _>>();

        let mut map = Map::new();
        map.insert("url".to_string(), self.url.into());
        map.insert("status".to_string(), self.status.into());
        map.insert("statusText".to_string(), self.status_text.into());
        map.insert("ok".to_string(), self.ok.into());
        map.insert("redirected".to_string(), self.redirected.into());
        map.insert("headers".to_string(), Value::Object(headers));
        map
    }
}

/// Flatten a header map into a plain mapping.
///
/// Each name appears once (lowercase, sorted); repeated values are joined
/// with `", "`.
#[must_use]
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let value = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_string(), value)
        })
        .collect()
}

// ============================================================================
// Buffered Response
// ============================================================================

/// Buffered HTTP response.
///
/// Duplicating is cheap: the body is reference-counted [`Bytes`].
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    status_text: String,
    url: String,
    redirected: bool,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Creates a new [`ResponseBuilder`].
    #[must_use]
    pub fn builder(status: u16) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// Creates a response from its parts.
    ///
    /// The status text defaults to the canonical reason phrase.
    #[must_use]
    pub fn new(status: http::StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            url: String::new(),
            redirected: false,
            headers,
            body,
        }
    }

    /// Buffer any [`http::Response`] by collecting its body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Body`] if the body fails while being collected.
    pub async fn from_http<B>(response: http::Response<B>) -> Result<Self>
    where
        B: http_body::Body,
        B::Error: Display,
    {
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| Error::body(e.to_string()))?
            .to_bytes();

        Ok(Self::new(parts.status, parts.headers, body))
    }

    /// Sets the final URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the status text.
    #[must_use]
    pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = status_text.into();
        self
    }

    /// Marks the response as redirected.
    #[must_use]
    pub const fn with_redirected(mut self, redirected: bool) -> Self {
        self.redirected = redirected;
        self
    }

    /// Raw body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }
}

impl ResponseLike for Response {
    fn status(&self) -> u16 {
        self.status
    }

    fn status_text(&self) -> &str {
        &self.status_text
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn redirected(&self) -> bool {
        self.redirected
    }

    fn duplicate(&self) -> Self {
        self.clone()
    }

    async fn read_json(self) -> Result<Value> {
        crate::from_json(&self.body)
    }

    async fn read_text(self) -> Result<String> {
        crate::from_text(&self.body)
    }
}

/// Builder for [`Response`].
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status: u16,
    status_text: Option<String>,
    url: String,
    redirected: bool,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            status_text: None,
            url: String::new(),
            redirected: false,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Appends a header; repeated names keep every value.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the status text instead of the canonical reason phrase.
    #[must_use]
    pub fn status_text(mut self, status_text: impl Into<String>) -> Self {
        self.status_text = Some(status_text.into());
        self
    }

    /// Sets the final URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Marks the response as redirected.
    #[must_use]
    pub const fn redirected(mut self, redirected: bool) -> Self {
        self.redirected = redirected;
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Build the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] for an out-of-range status or an
    /// invalid header name or value.
    pub fn build(self) -> Result<Response> {
        let status = http::StatusCode::from_u16(self.status)
            .map_err(|e| Error::invalid_response(e.to_string()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::invalid_response(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::invalid_response(format!("header value '{value}': {e}")))?;
            headers.append(name, value);
        }

        let mut response = Response::new(status, headers, self.body)
            .with_url(self.url)
            .with_redirected(self.redirected);
        if let Some(status_text) = self.status_text {
            response = response.with_status_text(status_text);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    fn json_response() -> Response {
        Response::builder(404)
            .header("Content-Type", "application/json")
            .url("https://somerandomurl.com")
            .body(r#"{"explanation":"some error occurred","title":"errorTitle"}"#)
            .build()
            .expect("valid response")
    }

    #[test]
    fn response_builder_defaults() {
        let response = json_response();

        check!(response.status() == 404);
        check!(response.status_text() == "Not Found");
        check!(response.url() == "https://somerandomurl.com");
        check!(!response.redirected());
    }

    #[test]
    fn response_content_type_is_case_insensitive() {
        let response = json_response();
        check!(response.content_type() == Some("application/json"));
        check!(response.headers().get("CONTENT-TYPE").is_some());
    }

    #[test]
    fn response_builder_rejects_bad_header() {
        let result = Response::builder(400).header("bad header", "x").build();
        let_assert!(Err(Error::InvalidResponse(message)) = result);
        check!(message.contains("bad header"));
    }

    #[test]
    fn response_builder_rejects_bad_status() {
        let result = Response::builder(1000).build();
        let_assert!(Err(Error::InvalidResponse(_)) = result);
    }

    #[test]
    fn response_custom_status_text() {
        let response = Response::builder(599)
            .status_text("")
            .build()
            .expect("valid response");
        check!(response.status_text() == "");
    }

    #[test]
    fn fields_capture() {
        let fields = json_response().fields();

        check!(fields.url == "https://somerandomurl.com");
        check!(fields.status == 404);
        check!(fields.status_text == "Not Found");
        check!(!fields.ok);
        check!(fields.headers.get("content-type").map(String::as_str) == Some("application/json"));
    }

    #[test]
    fn fields_into_map_order() {
        let map = json_response().fields().into_map();
        let keys = map.keys().map(String::as_str).collect::<Vec<_>>();
        check!(keys == ["url", "status", "statusText", "ok", "redirected", "headers"]);
        check!(map["headers"] == json!({"content-type": "application/json"}));
    }

    #[test]
    fn flatten_headers_joins_repeated_values() {
        let response = Response::builder(500)
            .header("X-Trace", "a")
            .header("x-trace", "b")
            .header("Content-Type", "text/plain")
            .build()
            .expect("valid response");

        let headers = flatten_headers(response.headers());
        check!(headers.len() == 2);
        check!(headers["x-trace"] == "a, b");
        check!(headers["content-type"] == "text/plain");
    }

    #[tokio::test]
    async fn duplicate_keeps_original_readable() {
        let response = json_response();
        let copy = response.duplicate();

        let from_copy = copy.read_json().await.expect("json");
        let from_original = response.read_json().await.expect("json");
        check!(from_copy == from_original);
        check!(from_copy["title"] == "errorTitle");
    }

    #[tokio::test]
    async fn read_text_and_invalid_json() {
        let response = Response::builder(404)
            .header("Content-Type", "text/plain")
            .body("some error occurred")
            .build()
            .expect("valid response");

        check!(response.duplicate().read_text().await.expect("text") == "some error occurred");
        let_assert!(Err(Error::JsonDeserialization { .. }) = response.read_json().await);
    }

    #[tokio::test]
    async fn from_http_collects_body() {
        let http_response = http::Response::builder()
            .status(503)
            .header("content-type", "text/html")
            .body(http_body_util::Full::new(Bytes::from("<html></html>")))
            .expect("http response");

        let response = Response::from_http(http_response).await.expect("buffered");
        check!(response.status() == 503);
        check!(response.status_text() == "Service Unavailable");
        check!(response.body().as_ref() == b"<html></html>");
        check!(response.content_type() == Some("text/html"));
    }
}
