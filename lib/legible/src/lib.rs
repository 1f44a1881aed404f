//! Readable errors out of native errors and failed HTTP responses.
//!
//! Hand a [`Failure`] to an [`ErrorHandler`] and get back an [`ErrorRecord`]
//! with a `title`, a `status` for responses, and a `message`.
//!
//! # Example
//!
//! ```ignore
//! use legible::prelude::*;
//!
//! let handler = ErrorHandler::new(false, Some("checkout"));
//!
//! let response = Response::builder(404)
//!     .header("Content-Type", "application/json")
//!     .body(r#"{"title":"Missing cart","explanation":"cart 42 does not exist"}"#)
//!     .build()?;
//!
//! let record = handler.get_error(response).await?;
//! assert_eq!(record.title(), "Missing cart");
//! assert_eq!(record.status(), Some(404));
//! ```
//!
//! In debug mode the record keeps every response field (`url`, `headers`,
//! body fields...); otherwise it is reduced to `title`, `status` and
//! `message`. Either way it is logged once through the handler's
//! [`LogSink`], by default [`TracingSink`].

pub mod classify;
mod config;
mod handler;
pub mod log;
pub mod mapper;
pub mod prelude;
pub mod view;

pub use classify::ContentKind;
pub use config::{HandlerConfig, HandlerConfigBuilder};
pub use handler::{ErrorHandler, ErrorHandlerBuilder, handle_error};
pub use log::{LogSink, TracingSink, format_record};
pub use view::project;

// Re-export core types
pub use legible_core::{
    Error, ErrorRecord, Failure, HeaderMap, NativeError, Response, ResponseBuilder,
    ResponseFields, ResponseLike, Result, StatusCode, flatten_headers, from_json, from_text,
    header, record,
};
