//! JSON encoding and decoding.
//!
//! Thin wrappers over `serde_json` so callers depend on one error type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Encode a value as compact JSON.
///
/// # Errors
///
/// Returns [`ValueError::Json`](crate::ValueError::Json) if the value's
/// `Serialize` impl fails (for example a map with non-string keys).
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a value as indented JSON.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Decode JSON text into a typed value.
///
/// # Errors
///
/// Returns [`ValueError::Json`](crate::ValueError::Json) on malformed text or
/// a shape mismatch.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Decode JSON text into an untyped [`Value`].
///
/// # Errors
///
/// Returns [`ValueError::Json`](crate::ValueError::Json) on malformed text.
pub fn decode_value(text: &str) -> Result<Value> {
    decode(text)
}
