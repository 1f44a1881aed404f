//! Prelude module for convenient imports.
//!
//! ```ignore
//! use legible_core::prelude::*;
//! ```

pub use crate::{
    Error, ErrorRecord, Failure, NativeError, Response, ResponseBuilder, ResponseFields,
    ResponseLike, Result,
};
