//! Content of a generic tag.

use weft_core::HtmlString;

/// Inner markup for [`HtmlBuilder::tag`](crate::HtmlBuilder::tag).
///
/// Parts are concatenated without a separator. Content is embedded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagContent {
    Text(String),
    Parts(Vec<String>),
}

impl TagContent {
    /// Concatenate into a single string.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Parts(parts) => parts.concat(),
        }
    }
}

impl From<&str> for TagContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TagContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<HtmlString> for TagContent {
    fn from(html: HtmlString) -> Self {
        Self::Text(html.into_string())
    }
}

impl From<Vec<String>> for TagContent {
    fn from(parts: Vec<String>) -> Self {
        Self::Parts(parts)
    }
}

impl From<Vec<&str>> for TagContent {
    fn from(parts: Vec<&str>) -> Self {
        Self::Parts(parts.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<HtmlString>> for TagContent {
    fn from(parts: Vec<HtmlString>) -> Self {
        Self::Parts(parts.into_iter().map(HtmlString::into_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_concatenate_without_separator() {
        let content = TagContent::from(vec!["<b>a</b>", "b"]);
        assert_eq!(content.into_string(), "<b>a</b>b");
    }

    #[test]
    fn test_html_parts() {
        let content = TagContent::from(vec![HtmlString::from("<i>x</i>"), HtmlString::from("y")]);
        assert_eq!(content.into_string(), "<i>x</i>y");
    }
}
