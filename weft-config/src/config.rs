//! Configuration types.

use indexmap::IndexMap;
use serde::Deserialize;
use weft_core::Attributes;

/// Root of `weft.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Entity encoding options.
    #[serde(default)]
    pub entities: EntitiesConfig,

    /// Default attributes per generated tag.
    #[serde(default)]
    pub defaults: DefaultAttributes,
}

/// `[entities]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitiesConfig {
    /// Re-encode `&` even when it already starts a character reference.
    #[serde(default)]
    pub double_encode: bool,
}

/// Tags whose default attributes are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultTag {
    Script,
    Style,
    Favicon,
}

impl DefaultTag {
    pub const ALL: [DefaultTag; 3] = [Self::Script, Self::Style, Self::Favicon];

    /// Section name under `[defaults]`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Favicon => "favicon",
        }
    }
}

/// `[defaults.*]` sections.
///
/// A section present in the file replaces the built-in defaults for that
/// tag; it is not merged with them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultAttributes {
    #[serde(default)]
    pub script: IndexMap<String, String>,

    #[serde(default = "default_style")]
    pub style: IndexMap<String, String>,

    #[serde(default = "default_favicon")]
    pub favicon: IndexMap<String, String>,
}

impl DefaultAttributes {
    /// Raw name/value table for a tag.
    pub fn table(&self, tag: DefaultTag) -> &IndexMap<String, String> {
        match tag {
            DefaultTag::Script => &self.script,
            DefaultTag::Style => &self.style,
            DefaultTag::Favicon => &self.favicon,
        }
    }

    /// Default attributes for a tag, in file order.
    pub fn attributes(&self, tag: DefaultTag) -> Attributes {
        self.table(tag)
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}

impl Default for DefaultAttributes {
    fn default() -> Self {
        Self {
            script: IndexMap::new(),
            style: default_style(),
            favicon: default_favicon(),
        }
    }
}

fn default_style() -> IndexMap<String, String> {
    table(&[("media", "all"), ("type", "text/css"), ("rel", "stylesheet")])
}

fn default_favicon() -> IndexMap<String, String> {
    table(&[("rel", "shortcut icon"), ("type", "image/x-icon")])
}

fn table(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
