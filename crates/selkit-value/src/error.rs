//! Error types for value encoding and rehydration.

/// Failure to encode, decode or rehydrate a value.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// Malformed JSON or a field of the wrong type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rehydration needs a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// JSON type name of the value that was supplied.
        found: &'static str,
    },

    /// A field the template requires is absent.
    #[error("{template} is missing required field `{field}`")]
    MissingField {
        /// Name of the template type.
        template: &'static str,
        /// The first required field not present in the data.
        field: &'static str,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, ValueError>;
