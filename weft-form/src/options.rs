//! Option lists for select, radio and checkbox controls.

use indexmap::IndexMap;
use weft_core::Attributes;

/// Ordered value → label pairs.
pub type Choices = IndexMap<String, String>;

/// Build [`Choices`] from any pairs of strings.
///
/// ```
/// use weft_form::choices;
///
/// let colors = choices([("red", "Red"), ("blue", "Blue")]);
/// assert_eq!(colors.get("red").map(String::as_str), Some("Red"));
/// ```
pub fn choices<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Choices
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(value, label)| (value.into(), label.into()))
        .collect()
}

/// Entry of a select box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
    /// A single `<option>` with its label.
    Choice(String),
    /// An `<optgroup>` of options; the entry key is the group label.
    Group(Choices),
}

/// Ordered options of a select box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    entries: IndexMap<String, SelectEntry>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries
            .insert(value.into(), SelectEntry::Choice(label.into()));
        self
    }

    /// Add an option group.
    pub fn group(mut self, label: impl Into<String>, options: Choices) -> Self {
        self.entries.insert(label.into(), SelectEntry::Group(options));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SelectEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl From<Choices> for SelectOptions {
    fn from(choices: Choices) -> Self {
        choices.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for SelectOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SelectOptions::new(), |options, (value, label)| {
                options.option(value, label)
            })
    }
}

/// Attributes for a select box, its options and its groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectAttributes {
    /// Attributes of the `<select>` element.
    pub select: Attributes,
    /// Attributes per option, keyed by option value.
    pub options: IndexMap<String, Attributes>,
    /// Attributes per `<optgroup>`, keyed by group label.
    pub optgroups: IndexMap<String, Attributes>,
}

impl SelectAttributes {
    /// Attributes for the `<select>` element only.
    pub fn for_select(attributes: Attributes) -> Self {
        Self {
            select: attributes,
            ..Self::default()
        }
    }

    /// Attributes for one option.
    pub fn with_option(mut self, value: impl Into<String>, attributes: Attributes) -> Self {
        self.options.insert(value.into(), attributes);
        self
    }

    /// Attributes for one group.
    pub fn with_optgroup(mut self, label: impl Into<String>, attributes: Attributes) -> Self {
        self.optgroups.insert(label.into(), attributes);
        self
    }
}
