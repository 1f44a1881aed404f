//! Prelude module for convenient imports.
//!
//! ```ignore
//! use legible::prelude::*;
//! ```

pub use crate::{
    ContentKind, Error, ErrorHandler, ErrorHandlerBuilder, ErrorRecord, Failure, HandlerConfig,
    LogSink, NativeError, Response, ResponseLike, Result, TracingSink,
};
