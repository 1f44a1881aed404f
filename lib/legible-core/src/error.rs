//! Error types for legible.

use derive_more::{Display, Error, From};

/// Errors raised while turning a failure value into a readable record.
///
/// Classification itself never fails: only reading a response body (or
/// building a response in the first place) can.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// JSON body could not be deserialized, with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "error.details").
        path: String,
        /// Error message.
        message: String,
    },

    /// Text body is not valid UTF-8.
    #[display("invalid UTF-8 body: {_0}")]
    #[from]
    InvalidUtf8(std::string::FromUtf8Error),

    /// The body source failed while being collected.
    #[display("body error: {_0}")]
    #[from(skip)]
    Body(#[error(not(source))] String),

    /// A response could not be assembled (bad header, bad status...).
    #[display("invalid response: {_0}")]
    #[from(skip)]
    InvalidResponse(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a body error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body(message.into())
    }

    /// Create an invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns `true` if the error happened while reading a response body.
    #[must_use]
    pub const fn is_body_error(&self) -> bool {
        matches!(
            self,
            Self::JsonDeserialization { .. } | Self::InvalidUtf8(_) | Self::Body(_)
        )
    }
}
