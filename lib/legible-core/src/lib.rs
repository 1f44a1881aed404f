//! Core types for legible.
//!
//! This crate provides the boundary types used by the readable-error engine:
//! - [`Failure`] - Tagged union of the values a failure can arrive as
//! - [`NativeError`] - A raised error reduced to name, message and type tag
//! - [`ResponseLike`] - Contract for HTTP responses with single-use bodies
//! - [`Response`] and [`ResponseBuilder`] - Buffered response implementation
//! - [`ResponseFields`] - Response properties carried into records
//! - [`ErrorRecord`] - Normalized, insertion-ordered readable error record
//! - [`Error`] and [`Result`] - Error handling
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod error;
mod failure;
mod native;
pub mod prelude;
pub mod record;
mod response;

pub use body::{from_json, from_text};
pub use error::{Error, Result};
pub use failure::Failure;
pub use native::NativeError;
pub use record::ErrorRecord;
pub use response::{Response, ResponseBuilder, ResponseFields, ResponseLike, flatten_headers};

// Re-export http crate types for status codes and headers
pub use http::{HeaderMap, StatusCode, header};
