//! Pre-rendered HTML wrapper.

use std::fmt;

use serde::Serialize;

/// Markup that has already been rendered and must be emitted as-is.
///
/// Every builder operation returns an `HtmlString`. Output layers should
/// write the inner text without escaping it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wrap raw markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the markup.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the markup is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HtmlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HtmlString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for HtmlString {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for HtmlString {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

impl From<HtmlString> for String {
    fn from(html: HtmlString) -> Self {
        html.0
    }
}

impl PartialEq<str> for HtmlString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HtmlString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for HtmlString {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let html = HtmlString::new("<b>&amp;</b>");
        assert_eq!(html.to_string(), "<b>&amp;</b>");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let html = HtmlString::from("<br>");
        assert_eq!(serde_json::to_string(&html).unwrap(), "\"<br>\"");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(HtmlString::default().is_empty());
        assert_eq!(HtmlString::default(), "");
    }
}
