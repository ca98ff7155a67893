//! Term/definition data for `<dl>` rendering.

use indexmap::IndexMap;
use weft_core::{Error, Result, Values};

/// Ordered terms, each with one or more definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionList {
    terms: IndexMap<String, Values>,
}

impl DescriptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term with its definitions.
    pub fn term(mut self, term: impl Into<String>, definitions: impl Into<Values>) -> Self {
        self.insert(term, definitions);
        self
    }

    /// Add a term in place (mutable).
    pub fn insert(&mut self, term: impl Into<String>, definitions: impl Into<Values>) -> &mut Self {
        self.terms.insert(term.into(), definitions.into());
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over terms and their definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.terms
            .iter()
            .map(|(term, definitions)| (term.as_str(), definitions.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for DescriptionList
where
    K: Into<String>,
    V: Into<Values>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = DescriptionList::new();
        for (term, definitions) in iter {
            list.insert(term, definitions);
        }
        list
    }
}

impl TryFrom<serde_json::Value> for DescriptionList {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(Error::shape("an object of terms", &value));
        };

        let mut list = DescriptionList::new();
        for (term, definitions) in map {
            list.insert(term, Values::try_from(definitions)?);
        }
        Ok(list)
    }
}
