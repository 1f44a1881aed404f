//! Failure values accepted at the boundary.

use crate::{NativeError, Response, ResponseLike};

/// Any value that may describe a failure.
///
/// The variant is decided once, when the value is converted; downstream code
/// matches on it instead of inspecting shapes.
#[derive(Debug, Clone)]
pub enum Failure<R = Response> {
    /// A raised error.
    Native(NativeError),
    /// An HTTP response.
    Response(R),
    /// Anything else, including an absent value.
    Unrecognized,
}

impl<R> Default for Failure<R> {
    fn default() -> Self {
        Self::Unrecognized
    }
}

impl Failure {
    /// A value that is neither an error nor a response.
    #[must_use]
    pub const fn unrecognized() -> Self {
        Self::Unrecognized
    }
}

impl<R> Failure<R> {
    /// Capture any [`std::error::Error`] as a native failure.
    #[must_use]
    pub fn native<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Native(NativeError::from_error(err))
    }

    /// Returns `true` for [`Failure::Native`].
    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Returns `true` for [`Failure::Response`].
    #[must_use]
    pub const fn is_response(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    /// Returns `true` for [`Failure::Unrecognized`].
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized)
    }
}

impl<R> From<NativeError> for Failure<R> {
    fn from(err: NativeError) -> Self {
        Self::Native(err)
    }
}

impl<R: ResponseLike> From<R> for Failure<R> {
    fn from(response: R) -> Self {
        Self::Response(response)
    }
}

impl<R> From<Box<dyn std::error::Error + Send + Sync>> for Failure<R> {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::native(err.as_ref())
    }
}

impl<R> From<()> for Failure<R> {
    fn from((): ()) -> Self {
        Self::Unrecognized
    }
}

impl<R, T> From<Option<T>> for Failure<R>
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unrecognized, Into::into)
    }
}
