//! "One or many" values and their normalization.
//!
//! View code often passes either a single string or a list where a list is
//! expected. [`Values`] makes that choice explicit, and the conversions
//! below are the only places it gets normalized.

use crate::{Error, Result};

/// A single string or a sequence of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Values {
    Scalar(String),
    Sequence(Vec<String>),
}

impl Values {
    /// Borrow as a slice; a scalar is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// Normalize to a sequence, wrapping a scalar as a single element.
    pub fn into_sequence(self) -> Vec<String> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Sequence(values) => values,
        }
    }

    /// Normalize to a sequence, splitting a scalar on commas.
    pub fn split_commas(self) -> Vec<String> {
        match self {
            Self::Scalar(value) => value.split(',').map(str::to_string).collect(),
            Self::Sequence(values) => values,
        }
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

impl From<Vec<&str>> for Values {
    fn from(values: Vec<&str>) -> Self {
        Self::Sequence(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Values {
    fn from(values: [&str; N]) -> Self {
        Self::Sequence(values.iter().map(|v| v.to_string()).collect())
    }
}

impl TryFrom<serde_json::Value> for Values {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(json_scalar)
                .collect::<Result<Vec<_>>>()
                .map(Self::Sequence),
            other => json_scalar(other).map(Self::Scalar),
        }
    }
}

/// Coerce a JSON scalar to its string form.
fn json_scalar(value: serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(if b { "1".to_string() } else { String::new() }),
        other => Err(Error::shape("a string or number", &other)),
    }
}

/// Normalized set of selected values for form controls.
///
/// # Example
///
/// ```
/// use weft_core::{Selection, Values};
///
/// let selection = Selection::normalize(Some(Values::from("red,blue")));
/// assert!(selection.contains("blue"));
/// assert!(!selection.contains("green"));
///
/// assert!(Selection::normalize(None).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Normalize an optional selection.
    ///
    /// A scalar is split on commas; a sequence is taken as-is; no selection
    /// is the empty set.
    pub fn normalize(selected: Option<Values>) -> Self {
        Self(selected.map(Values::split_commas).unwrap_or_default())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|selected| selected == value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The selected values in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Values> for Selection {
    fn from(values: Values) -> Self {
        Self::normalize(Some(values))
    }
}
