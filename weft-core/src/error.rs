use thiserror::Error;

/// Result type for conversions into weft's typed inputs.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Loosely-typed input did not have the shape the target type requires.
    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("'{name}' is not a valid attribute name")]
    InvalidAttributeName { name: String },
}

impl Error {
    /// Create a shape error describing the JSON value that was found.
    pub fn shape(expected: &'static str, value: &serde_json::Value) -> Self {
        Error::Shape {
            expected,
            found: json_kind(value),
        }
    }
}

/// Short name of a JSON value's kind for error messages.
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
