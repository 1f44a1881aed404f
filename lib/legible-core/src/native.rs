//! Native (in-process) error values.

use std::borrow::Cow;

const DEFAULT_TYPE_TAG: &str = "error";

/// A raised error value, reduced to what a readable record needs.
///
/// Empty names and messages are treated as absent, so mapping falls back to
/// the type tag and the default message respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    name: Option<String>,
    message: Option<String>,
    type_tag: Cow<'static, str>,
}

impl Default for NativeError {
    fn default() -> Self {
        Self {
            name: None,
            message: None,
            type_tag: Cow::Borrowed(DEFAULT_TYPE_TAG),
        }
    }
}

impl NativeError {
    /// Creates a native error with a name and a message.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::default().with_name(name).with_message(message)
    }

    /// Captures any [`std::error::Error`].
    ///
    /// The name is the short type name (`ParseIntError`), the message is the
    /// `Display` output and the type tag is the full type path.
    #[must_use]
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let type_tag = std::any::type_name::<E>();
        Self {
            name: non_empty(short_type_name(type_tag).to_string()),
            message: non_empty(err.to_string()),
            type_tag: Cow::Borrowed(type_tag),
        }
    }

    /// Sets the error name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_empty(name.into());
        self
    }

    /// Sets the error message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message.into());
        self
    }

    /// Sets the type tag used when the error has no name.
    #[must_use]
    pub fn with_type_tag(mut self, type_tag: impl Into<Cow<'static, str>>) -> Self {
        self.type_tag = type_tag.into();
        self
    }

    /// Error name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Runtime type tag of the value.
    #[must_use]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

// `foo::Bar<baz::Qux>` -> `Bar`, `dyn core::error::Error + Send` -> `Error`
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    let base = base.split(" + ").next().unwrap_or(base);
    base.rsplit("::").next().unwrap_or(base)
}
