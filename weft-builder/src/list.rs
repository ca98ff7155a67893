//! Nested list structure for `<ol>`/`<ul>` rendering.

use indexmap::IndexMap;
use weft_core::{Error, Result, positional_index};

/// Key of a list entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListKey {
    /// Positional entry; a nested list under it renders as a sibling list.
    Index(usize),
    /// Labelled entry; a nested list renders inside `<li>label…</li>`.
    Label(String),
}

/// Value of a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Leaf(String),
    Branch(ListTree),
}

/// Ordered, arbitrarily nested list data.
///
/// # Example
///
/// ```
/// use weft_builder::ListTree;
///
/// let list = ListTree::new()
///     .item("Home")
///     .group("Docs", ListTree::from_iter(["Guide", "API"]));
///
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTree {
    entries: IndexMap<ListKey, ListItem>,
}

impl ListTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a leaf at the next positional index.
    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.push(ListItem::Leaf(text.into()));
        self
    }

    /// Add a labelled nested list.
    pub fn group(mut self, label: impl Into<String>, list: ListTree) -> Self {
        self.insert(ListKey::Label(label.into()), ListItem::Branch(list));
        self
    }

    /// Append a nested list at the next positional index.
    pub fn nested(mut self, list: ListTree) -> Self {
        self.push(ListItem::Branch(list));
        self
    }

    /// Insert an entry, keeping the position of an existing key (mutable).
    pub fn insert(&mut self, key: ListKey, item: ListItem) -> &mut Self {
        self.entries.insert(key, item);
        self
    }

    /// Append an entry at the next positional index (mutable).
    pub fn push(&mut self, item: ListItem) -> &mut Self {
        let index = self
            .entries
            .keys()
            .filter_map(|key| match key {
                ListKey::Index(index) => Some(index + 1),
                ListKey::Label(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.entries.insert(ListKey::Index(index), item);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ListKey, &ListItem)> {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for ListTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ListTree::new();
        for text in iter {
            list.push(ListItem::Leaf(text.into()));
        }
        list
    }
}

impl TryFrom<serde_json::Value> for ListTree {
    type Error = Error;

    /// Arrays become positional entries and objects keep their keys; keys
    /// that are canonical unsigned integers are positional.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let mut list = ListTree::new();
        match value {
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    list.insert(ListKey::Index(index), json_item(item)?);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    let key = match positional_index(&key) {
                        Some(index) => ListKey::Index(index),
                        None => ListKey::Label(key),
                    };
                    list.insert(key, json_item(item)?);
                }
            }
            other => return Err(Error::shape("an array or object", &other)),
        }
        Ok(list)
    }
}

fn json_item(value: serde_json::Value) -> Result<ListItem> {
    use serde_json::Value;

    Ok(match value {
        Value::Array(_) | Value::Object(_) => ListItem::Branch(ListTree::try_from(value)?),
        Value::String(text) => ListItem::Leaf(text),
        Value::Number(n) => ListItem::Leaf(n.to_string()),
        Value::Bool(flag) => ListItem::Leaf(if flag { "1".to_string() } else { String::new() }),
        Value::Null => ListItem::Leaf(String::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_indices() {
        let list = ListTree::new().item("a").group("G", ListTree::new()).item("b");
        let keys: Vec<_> = list.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ListKey::Index(0),
                ListKey::Label("G".to_string()),
                ListKey::Index(1)
            ]
        );
    }

    #[test]
    fn test_from_json_array() {
        let list = ListTree::try_from(serde_json::json!(["a", ["b", "c"]])).unwrap();
        let expected = ListTree::new()
            .item("a")
            .nested(ListTree::from_iter(["b", "c"]));
        assert_eq!(list, expected);
    }

    #[test]
    fn test_from_json_object_keeps_order() {
        let list = ListTree::try_from(serde_json::json!({
            "Zeta": ["z"],
            "Alpha": ["a"],
            "0": "first"
        }))
        .unwrap();
        let keys: Vec<_> = list.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(
            keys,
            vec![
                ListKey::Label("Zeta".to_string()),
                ListKey::Label("Alpha".to_string()),
                ListKey::Index(0)
            ]
        );
    }

    #[test]
    fn test_from_json_non_canonical_keys_are_labels() {
        let list = ListTree::try_from(serde_json::json!({
            "0": "a",
            "00": "b",
            "+1": ["x"]
        }))
        .unwrap();
        let mut expected = ListTree::new().item("a");
        expected.insert(ListKey::Label("00".to_string()), ListItem::Leaf("b".to_string()));
        let expected = expected.group("+1", ListTree::from_iter(["x"]));
        assert_eq!(list.len(), 3);
        assert_eq!(list, expected);
    }

    #[test]
    fn test_from_json_rejects_scalar_root() {
        let err = ListTree::try_from(serde_json::json!("x")).unwrap_err();
        assert_eq!(
            err,
            Error::Shape {
                expected: "an array or object",
                found: "a string"
            }
        );
    }
}
