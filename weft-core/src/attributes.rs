//! Attribute maps and their serialization to HTML attribute strings.

use std::fmt;

use indexmap::IndexMap;

use crate::{Error, Result};

/// Key of an attribute entry.
///
/// Integer keys mark bare attributes such as `required`, whose value is
/// emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    /// Positional bare attribute.
    Index(usize),
    /// Named attribute, rendered as `name="value"`.
    Name(String),
}

impl AttrKey {
    /// The attribute name, if this is a named key.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl From<&str> for AttrKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AttrKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for AttrKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Value of an attribute entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Plain text, inserted without escaping.
    Text(String),
    /// Boolean property: present when true, omitted when false.
    Flag(bool),
    /// Space-separated tokens, e.g. a class list.
    List(Vec<String>),
    /// Explicitly absent; the attribute is not rendered.
    Absent,
}

impl AttrValue {
    /// Whether the value suppresses its attribute entirely.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for AttrValue {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(tokens: Vec<String>) -> Self {
        Self::List(tokens)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(tokens: Vec<&str>) -> Self {
        Self::List(tokens.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AttrValue {
    fn from(tokens: [&str; N]) -> Self {
        Self::List(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

/// Ordered attribute map.
///
/// Keys keep their insertion order, which is also the rendering order.
///
/// # Example
///
/// ```
/// use weft_core::Attributes;
///
/// let attrs = Attributes::new()
///     .set("class", ["btn", "primary"])
///     .set("disabled", true)
///     .bare("required");
///
/// assert_eq!(attrs.render(), r#" class="btn primary" disabled required"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<AttrKey, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, keeping the position of an existing key.
    pub fn set(mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append a bare attribute at the next positional index.
    pub fn bare(mut self, attr: impl Into<String>) -> Self {
        self.push_bare(attr);
        self
    }

    /// Set an attribute in place (mutable).
    pub fn insert(&mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Append a bare attribute in place (mutable).
    pub fn push_bare(&mut self, attr: impl Into<String>) -> &mut Self {
        let index = self.next_index();
        self.entries
            .insert(AttrKey::Index(index), AttrValue::Text(attr.into()));
        self
    }

    /// Look up a named attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(&AttrKey::Name(name.to_string()))
    }

    /// Whether the map holds the given key.
    pub fn contains(&self, key: &AttrKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a named attribute, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(&AttrKey::Name(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
        self.entries.iter()
    }

    /// Merge `overrides` over `self`.
    ///
    /// Named keys from `overrides` replace existing values but keep the
    /// position they had in `self`. Positional keys from both sides are
    /// renumbered in order, so bare attributes never collide.
    pub fn merge(self, overrides: Attributes) -> Self {
        let mut merged = Attributes::new();
        for (key, value) in self.entries.into_iter().chain(overrides.entries) {
            match key {
                AttrKey::Index(_) => {
                    let index = merged.next_index();
                    merged.entries.insert(AttrKey::Index(index), value);
                }
                key @ AttrKey::Name(_) => {
                    merged.entries.insert(key, value);
                }
            }
        }
        merged
    }

    /// Add entries from `other` whose keys are not present yet.
    ///
    /// Unlike [`merge`](Self::merge), existing values always win.
    pub fn union(mut self, other: Attributes) -> Self {
        for (key, value) in other.entries {
            self.entries.entry(key).or_insert(value);
        }
        self
    }

    /// Serialize to an attribute string.
    ///
    /// Returns an empty string when nothing renders, otherwise the tokens
    /// joined by single spaces with one leading space.
    pub fn render(&self) -> String {
        let tokens: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(key, value)| attribute_element(key, value))
            .collect();

        if tokens.is_empty() {
            String::new()
        } else {
            format!(" {}", tokens.join(" "))
        }
    }

    fn next_index(&self) -> usize {
        self.entries
            .keys()
            .filter_map(|key| match key {
                AttrKey::Index(index) => Some(index + 1),
                AttrKey::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<AttrKey>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<AttrKey>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a AttrKey, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, AttrKey, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl TryFrom<serde_json::Value> for Attributes {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(Error::shape("an object of attributes", &value));
        };

        let mut attrs = Attributes::new();
        for (key, value) in map {
            let key = match positional_index(&key) {
                Some(index) => AttrKey::Index(index),
                None if is_valid_attribute_name(&key) => AttrKey::Name(key),
                None => return Err(Error::InvalidAttributeName { name: key }),
            };
            attrs.entries.insert(key, json_attr_value(value)?);
        }
        Ok(attrs)
    }
}

/// Interpret a map key as a position.
///
/// Only canonical decimal integers qualify: `"01"` and `"+1"` stay names.
pub fn positional_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}

fn json_attr_value(value: serde_json::Value) -> Result<AttrValue> {
    use serde_json::Value;

    match value {
        Value::Null => Ok(AttrValue::Absent),
        Value::Bool(flag) => Ok(AttrValue::Flag(flag)),
        Value::Number(n) => Ok(AttrValue::Text(n.to_string())),
        Value::String(s) => Ok(AttrValue::Text(s)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(Error::shape("a string token", &other)),
            })
            .collect::<Result<Vec<_>>>()
            .map(AttrValue::List),
        other @ Value::Object(_) => Err(Error::shape("an attribute value", &other)),
    }
}

/// Render a single attribute entry, or `None` when it produces no token.
pub fn attribute_element(key: &AttrKey, value: &AttrValue) -> Option<String> {
    let name = match key {
        // Positional entries are bare attributes like `required`; the value
        // is the whole token.
        AttrKey::Index(_) => {
            return match value {
                AttrValue::Text(text) => Some(text.clone()),
                AttrValue::List(tokens) => Some(tokens.join(" ")),
                AttrValue::Flag(_) | AttrValue::Absent => None,
            };
        }
        AttrKey::Name(name) => name,
    };

    match value {
        AttrValue::Flag(flag) if name == "value" => {
            Some(format!("value=\"{}\"", if *flag { "1" } else { "" }))
        }
        AttrValue::Flag(true) => Some(name.clone()),
        AttrValue::Flag(false) | AttrValue::Absent => None,
        AttrValue::List(tokens) => Some(format!("{}=\"{}\"", name, tokens.join(" "))),
        AttrValue::Text(text) => Some(format!("{}=\"{}\"", name, text)),
    }
}

/// Check that a name can appear as an attribute name inside a tag.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Attributes::new().render(), "");
    }

    #[test]
    fn test_class_list() {
        let attrs = Attributes::new().set("class", ["a", "b"]);
        assert_eq!(attrs.render(), r#" class="a b""#);
    }

    #[test]
    fn test_boolean_flags() {
        assert_eq!(Attributes::new().set("disabled", true).render(), " disabled");
        assert_eq!(Attributes::new().set("disabled", false).render(), "");
    }

    #[test]
    fn test_value_flag_is_coerced() {
        assert_eq!(Attributes::new().set("value", true).render(), r#" value="1""#);
        assert_eq!(Attributes::new().set("value", false).render(), r#" value="""#);
    }

    #[test]
    fn test_positional_key_is_bare() {
        let attrs = Attributes::new().set(0usize, "required");
        assert_eq!(attrs.render(), " required");
    }

    #[test]
    fn test_absent_is_omitted() {
        let attrs = Attributes::new()
            .set("id", "x")
            .set("alt", None::<&str>)
            .set("title", "t");
        assert_eq!(attrs.render(), r#" id="x" title="t""#);
    }

    #[test]
    fn test_text_is_not_escaped() {
        let attrs = Attributes::new().set("data-x", "a<b");
        assert_eq!(attrs.render(), r#" data-x="a<b""#);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let attrs = Attributes::new()
            .set("c", "3")
            .set("a", "1")
            .set("b", "2");
        assert_eq!(attrs.render(), r#" c="3" a="1" b="2""#);
    }

    #[test]
    fn test_bare_uses_next_index() {
        let attrs = Attributes::new().bare("required").bare("autofocus");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![AttrKey::Index(0), AttrKey::Index(1)]);
        assert_eq!(attrs.render(), " required autofocus");
    }

    #[test]
    fn test_merge_overrides_in_place() {
        let defaults = Attributes::new()
            .set("media", "all")
            .set("type", "text/css")
            .set("rel", "stylesheet");
        let merged = defaults.merge(Attributes::new().set("media", "print").set("id", "s"));
        assert_eq!(
            merged.render(),
            r#" media="print" type="text/css" rel="stylesheet" id="s""#
        );
    }

    #[test]
    fn test_merge_renumbers_positional_keys() {
        let left = Attributes::new().bare("required");
        let right = Attributes::new().bare("autofocus");
        let merged = left.merge(right);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.render(), " required autofocus");
    }

    #[test]
    fn test_union_keeps_existing() {
        let attrs = Attributes::new()
            .set("id", "color-red")
            .union(Attributes::new().set("id", "other").set("class", "radio"));
        assert_eq!(attrs.render(), r#" id="color-red" class="radio""#);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs = Attributes::new().set("a", "1").set("b", "2").set("c", "3");
        assert_eq!(attrs.remove("b"), Some(AttrValue::from("2")));
        assert_eq!(attrs.render(), r#" a="1" c="3""#);
    }

    #[test]
    fn test_from_json() {
        let attrs = Attributes::try_from(serde_json::json!({
            "class": ["a", "b"],
            "disabled": true,
            "hidden": false,
            "title": null,
            "tabindex": 3,
            "0": "required"
        }))
        .unwrap();
        assert_eq!(attrs.render(), r#" class="a b" disabled tabindex="3" required"#);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Attributes::try_from(serde_json::json!(["a"])).unwrap_err();
        assert_eq!(
            err,
            Error::Shape {
                expected: "an object of attributes",
                found: "an array"
            }
        );
    }

    #[test]
    fn test_from_json_rejects_nested_object() {
        let err = Attributes::try_from(serde_json::json!({ "data": { "x": 1 } })).unwrap_err();
        assert!(matches!(err, Error::Shape { found: "an object", .. }));
    }

    #[test]
    fn test_from_json_rejects_bad_name() {
        let err = Attributes::try_from(serde_json::json!({ "on click": "x" })).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAttributeName {
                name: "on click".to_string()
            }
        );
    }

    #[test]
    fn test_from_json_non_canonical_keys_stay_distinct() {
        let attrs = Attributes::try_from(serde_json::json!({ "0": "required", "00": "x" }))
            .unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.render(), r#" required 00="x""#);
    }

    #[test]
    fn test_positional_index() {
        assert_eq!(positional_index("0"), Some(0));
        assert_eq!(positional_index("42"), Some(42));
        assert_eq!(positional_index("00"), None);
        assert_eq!(positional_index("01"), None);
        assert_eq!(positional_index("+1"), None);
        assert_eq!(positional_index("-1"), None);
        assert_eq!(positional_index("id"), None);
    }

    #[test]
    fn test_is_valid_attribute_name() {
        assert!(is_valid_attribute_name("data-id"));
        assert!(is_valid_attribute_name("aria-label"));
        assert!(!is_valid_attribute_name(""));
        assert!(!is_valid_attribute_name("a b"));
        assert!(!is_valid_attribute_name("a=b"));
        assert!(!is_valid_attribute_name("\"x"));
    }
}
