//! Body decoding utilities.

use crate::Result;

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that a failure names the field that could
/// not be decoded.
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if the bytes are not valid
/// JSON for `T`.
///
/// # Example
///
/// ```
/// use legible_core::from_json;
/// use serde_json::Value;
///
/// let body: Value = from_json(br#"{"explanation":"boom"}"#).expect("deserialize");
/// assert_eq!(body["explanation"], "boom");
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

/// Decode a body as UTF-8 text.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidUtf8`] if the bytes are not valid UTF-8.
pub fn from_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(Into::into)
}
