//! The error handler: classify, map, project, log.

use legible_core::{ErrorRecord, Failure, ResponseLike, Result};
use tracing::{debug, warn};

use crate::classify::ContentKind;
use crate::config::{HandlerConfig, HandlerConfigBuilder};
use crate::log::{LogSink, TracingSink, format_record};
use crate::mapper::{
    map_html, map_json, map_native, map_text, map_unknown_response, map_unrecognized,
};
use crate::view::project;

/// Classify a failure and map it to a full record.
///
/// Responses are read from a duplicate, so `failure` stays untouched. HTML
/// and unrecognized content types never read the body.
///
/// # Errors
///
/// Returns the body-reading error of JSON and text responses as-is.
pub async fn handle_error<R: ResponseLike>(failure: &Failure<R>) -> Result<ErrorRecord> {
    let response = match failure {
        Failure::Native(err) => return Ok(map_native(err)),
        Failure::Unrecognized => return Ok(map_unrecognized()),
        Failure::Response(response) => response.duplicate(),
    };

    let kind = ContentKind::sniff(response.content_type());
    debug!(
        status = response.status(),
        %kind,
        reads_body = kind.reads_body(),
        "classified response"
    );

    let fields = response.fields();
    let record = match kind {
        ContentKind::Json => map_json(fields, response.read_json().await.inspect_err(body_failed)?),
        ContentKind::Text => map_text(fields, response.read_text().await.inspect_err(body_failed)?),
        ContentKind::Html => map_html(fields),
        ContentKind::Unknown => map_unknown_response(fields),
    };
    Ok(record)
}

fn body_failed(err: &legible_core::Error) {
    warn!(error = %err, "failed to read response body");
}

/// Turns failures into readable error records.
///
/// Holds immutable configuration only; calls are independent.
///
/// # Example
///
/// ```ignore
/// use legible::{ErrorHandler, Response};
///
/// let handler = ErrorHandler::new(false, Some("checkout"));
/// let record = handler.get_error(response).await?;
/// println!("{}: {:?}", record.title(), record.message());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler<S = TracingSink> {
    config: HandlerConfig,
    sink: S,
}

impl ErrorHandler {
    /// Create a handler logging through `tracing`.
    #[must_use]
    pub fn new(debug: bool, info: Option<&str>) -> Self {
        Self::with_config(HandlerConfig {
            debug,
            info: info.map(str::to_string),
        })
    }

    /// Create a handler from a configuration.
    #[must_use]
    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            config,
            sink: TracingSink,
        }
    }

    /// Create a new handler builder.
    #[must_use]
    pub fn builder() -> ErrorHandlerBuilder {
        ErrorHandlerBuilder::default()
    }
}

/// Builder for [`ErrorHandler`].
///
/// ```ignore
/// let handler = ErrorHandler::builder().debug(true).info("checkout").build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorHandlerBuilder {
    config: HandlerConfigBuilder,
}

impl ErrorHandlerBuilder {
    /// Set debug mode.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config = self.config.debug(debug);
        self
    }

    /// Set the log tag.
    #[must_use]
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.config = self.config.info(info);
        self
    }

    /// Build the handler, logging through `tracing`.
    #[must_use]
    pub fn build(self) -> ErrorHandler {
        ErrorHandler::with_config(self.config.build())
    }
}

impl<S: LogSink> ErrorHandler<S> {
    /// Replace the log sink.
    #[must_use]
    pub fn with_sink<S2: LogSink>(self, sink: S2) -> ErrorHandler<S2> {
        ErrorHandler {
            config: self.config,
            sink,
        }
    }

    /// Handler configuration.
    #[must_use]
    pub const fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Classify and map a failure, without projection or logging.
    ///
    /// # Errors
    ///
    /// See [`handle_error`].
    pub async fn handle_error<R: ResponseLike>(&self, failure: &Failure<R>) -> Result<ErrorRecord> {
        handle_error(failure).await
    }

    /// Get the readable record of a failure.
    ///
    /// The record is projected for the configured mode, logged once, then
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading a JSON or text response body fails.
    pub async fn get_error<R: ResponseLike>(
        &self,
        failure: impl Into<Failure<R>>,
    ) -> Result<ErrorRecord> {
        let failure = failure.into();
        let record = handle_error(&failure).await?;
        let record = project(record, self.config.debug);
        self.log_error(&record);
        Ok(record)
    }

    /// Format a record, emit it to the sink and return the formatted block.
    pub fn log_error(&self, record: &ErrorRecord) -> String {
        let line = format_record(record, self.config.info.as_deref());
        self.sink.emit(record, &line);
        line
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert2::{check, let_assert};
    use legible_core::{Error, HeaderMap, NativeError, Response};
    use serde_json::{Value, json};

    use super::*;

    /// Response whose body readers always fail.
    #[derive(Debug, Clone)]
    struct UnreadableResponse {
        headers: HeaderMap,
    }

    impl UnreadableResponse {
        fn new(content_type: &'static str) -> Self {
            let mut headers = HeaderMap::new();
            headers.insert(
                legible_core::header::CONTENT_TYPE,
                legible_core::header::HeaderValue::from_static(content_type),
            );
            Self { headers }
        }
    }

    impl ResponseLike for UnreadableResponse {
        fn status(&self) -> u16 {
            502
        }

        fn status_text(&self) -> &str {
            "Bad Gateway"
        }

        fn headers(&self) -> &HeaderMap {
            &self.headers
        }

        fn duplicate(&self) -> Self {
            self.clone()
        }

        async fn read_json(self) -> Result<Value> {
            Err(Error::body("body was read"))
        }

        async fn read_text(self) -> Result<String> {
            Err(Error::body("body was read"))
        }
    }

    fn capture() -> (Arc<Mutex<Vec<String>>>, impl LogSink) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let lines = Arc::clone(&lines);
            move |line: &str| lines.lock().expect("lock").push(line.to_string())
        };
        (lines, sink)
    }

    fn text_response(body: &'static str) -> Response {
        Response::builder(404)
            .header("Content-Type", "text/plain")
            .body(body)
            .build()
            .expect("valid response")
    }

    #[tokio::test]
    async fn handle_error_leaves_response_readable() {
        let failure = Failure::from(text_response("some error occurred"));

        let first = handle_error(&failure).await.expect("record");
        let second = handle_error(&failure).await.expect("record");
        check!(first == second);

        let_assert!(Failure::Response(response) = failure);
        check!(response.read_text().await.expect("text") == "some error occurred");
    }

    #[tokio::test]
    async fn html_and_unknown_never_read_the_body() {
        let record = handle_error(&Failure::from(UnreadableResponse::new("text/html")))
            .await
            .expect("record");
        check!(record.message() == Some("HTML can not be processed."));
        check!(record.title() == "Bad Gateway");

        let record = handle_error(&Failure::from(UnreadableResponse::new("image/png")))
            .await
            .expect("record");
        check!(record.message() == Some("Something went wrong."));
    }

    #[tokio::test]
    async fn body_failure_propagates() {
        let result = handle_error(&Failure::from(UnreadableResponse::new("application/json"))).await;
        let_assert!(Err(Error::Body(_)) = result);

        let result = handle_error(&Failure::from(UnreadableResponse::new("text/plain"))).await;
        let_assert!(Err(Error::Body(_)) = result);
    }

    #[tokio::test]
    async fn get_error_logs_once_after_projection() {
        let (lines, sink) = capture();
        let handler = ErrorHandler::new(false, Some("checkout")).with_sink(sink);

        let record = handler
            .get_error(text_response("some error occurred"))
            .await
            .expect("record");

        check!(
            Value::from(record)
                == json!({"title": "Not Found", "status": 404, "message": "some error occurred"})
        );
        let lines = lines.lock().expect("lock");
        check!(
            lines.as_slice()
                == ["logging error: checkout\n\ttitle: Not Found\n\tstatus: 404\n\tmessage: some error occurred\n"]
        );
    }

    #[tokio::test]
    async fn get_error_debug_logs_full_record() {
        let (lines, sink) = capture();
        let handler = ErrorHandler::new(true, None).with_sink(sink);

        let record = handler
            .get_error(text_response("some error occurred"))
            .await
            .expect("record");
        check!(record.contains_key("headers"));

        let lines = lines.lock().expect("lock");
        check!(lines.len() == 1);
        let_assert!(Some(line) = lines.first());
        check!(line.starts_with("logging error:\n\turl: \n\tstatus: 404\n"));
        check!(line.contains("\theaders: {\"content-type\":\"text/plain\"}\n"));
    }

    #[tokio::test]
    async fn get_error_failure_is_not_logged() {
        let (lines, sink) = capture();
        let handler = ErrorHandler::new(false, None).with_sink(sink);

        let result = handler
            .get_error(UnreadableResponse::new("application/json"))
            .await;
        check!(result.is_err());
        check!(lines.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn get_error_native() {
        let (_lines, sink) = capture();
        let handler = ErrorHandler::new(true, None).with_sink(sink);

        let record = handler
            .get_error::<Response>(NativeError::new("TypeError", "This is a type error"))
            .await
            .expect("record");
        check!(Value::from(record) == json!({"title": "TypeError", "message": "This is a type error"}));
    }

    #[test]
    fn builder_defaults() {
        let handler = ErrorHandler::builder().build();
        check!(handler.config() == &HandlerConfig::default());
    }

    #[tokio::test]
    async fn builder_overrides() {
        let (lines, sink) = capture();
        let handler = ErrorHandler::builder()
            .debug(true)
            .info("checkout")
            .build()
            .with_sink(sink);

        check!(handler.config().debug);
        check!(handler.config().info.as_deref() == Some("checkout"));

        let record = handler
            .get_error(text_response("some error occurred"))
            .await
            .expect("record");
        check!(record.contains_key("headers"));
        let_assert!(Some(line) = lines.lock().expect("lock").first().cloned());
        check!(line.starts_with("logging error: checkout\n"));
    }

    #[test]
    fn log_error_returns_block() {
        let handler = ErrorHandler::new(false, None).with_sink(|_: &str| {});
        let block = handler.log_error(&ErrorRecord::new("Unknown Error", "Something went wrong."));
        check!(block == "logging error:\n\ttitle: Unknown Error\n\tmessage: Something went wrong.\n");
    }
}
