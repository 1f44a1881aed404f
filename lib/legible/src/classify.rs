//! Content-type classification.
//!
//! Markers are checked in a fixed order, case-insensitively, as substrings of
//! the `Content-Type` value. The first hit wins, so
//! `application/json+html` is JSON.

use derive_more::Display;

/// How a response body is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContentKind {
    /// Body is read and parsed as JSON.
    #[display("json")]
    Json,
    /// Body is read as text.
    #[display("text")]
    Text,
    /// Body is never read.
    #[display("html")]
    Html,
    /// No marker matched; body is never read.
    #[display("unknown")]
    Unknown,
}

/// Ordered `(marker, kind)` rules, evaluated top to bottom.
pub const CONTENT_RULES: [(&str, ContentKind); 3] = [
    ("json", ContentKind::Json),
    ("plain", ContentKind::Text),
    ("html", ContentKind::Html),
];

impl ContentKind {
    /// Classify a `Content-Type` value.
    ///
    /// A missing header matches nothing.
    #[must_use]
    pub fn sniff(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return Self::Unknown;
        };
        let content_type = content_type.to_lowercase();

        CONTENT_RULES
            .iter()
            .find(|(marker, _)| content_type.contains(marker))
            .map_or(Self::Unknown, |(_, kind)| *kind)
    }

    /// Returns `true` if handling this kind consumes the body.
    #[must_use]
    pub const fn reads_body(&self) -> bool {
        matches!(self, Self::Json | Self::Text)
    }
}
