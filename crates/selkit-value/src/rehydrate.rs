//! Typed construction from decoded JSON.
//!
//! A [`Template`] is a concrete type that names the fields it needs. Given
//! decoded data, [`rehydrate`] checks those fields are present and builds the
//! typed value, so the caller gets the template's methods over the data.
//! Fields the template does not know about are ignored.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ValueError};
use crate::serializer::decode_value;

/// A type that can be rebuilt from a decoded JSON object.
pub trait Template: DeserializeOwned {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Fields that must be present in the decoded object.
    const FIELDS: &'static [&'static str];
}

/// Build a `T` from an already decoded value.
///
/// # Errors
///
/// - [`ValueError::NotAnObject`] if `data` is not a JSON object
/// - [`ValueError::MissingField`] for the first absent entry of [`Template::FIELDS`]
/// - [`ValueError::Json`] if a present field has the wrong type
pub fn rehydrate<T: Template>(data: Value) -> Result<T> {
    let Value::Object(fields) = &data else {
        return Err(ValueError::NotAnObject {
            found: json_type_name(&data),
        });
    };

    if let Some(missing) = T::FIELDS.iter().copied().find(|f| !fields.contains_key(*f)) {
        return Err(ValueError::MissingField {
            template: T::NAME,
            field: missing,
        });
    }

    Ok(serde_json::from_value(data)?)
}

/// Decode `text` and build a `T` from it.
///
/// # Errors
///
/// See [`rehydrate`]; malformed text yields [`ValueError::Json`].
pub fn rehydrate_str<T: Template>(text: &str) -> Result<T> {
    rehydrate(decode_value(text)?)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
