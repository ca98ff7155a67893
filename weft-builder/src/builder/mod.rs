//! The HTML builder.

mod links;
mod lists;

use weft_config::{Config, DefaultTag};
use weft_core::{AttrKey, AttrValue, Attributes, HtmlString, decode_entities, encode_entities};

use crate::TagContent;

/// Generates HTML fragments for view code.
///
/// The builder holds only its [`Config`]; every method is a pure function of
/// its arguments apart from the random source used for email obfuscation.
///
/// # Example
///
/// ```
/// use weft_builder::HtmlBuilder;
/// use weft_core::Attributes;
///
/// let html = HtmlBuilder::new();
///
/// assert_eq!(
///     html.style("/css/app.css", Attributes::new()).as_str(),
///     r#"<link media="all" type="text/css" rel="stylesheet" href="/css/app.css">"#
/// );
/// assert_eq!(
///     html.tag("p", "Hi", Attributes::new().set("class", "lead")).as_str(),
///     r#"<p class="lead">Hi</p>"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlBuilder {
    config: Config,
}

impl HtmlBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a string to HTML entities.
    pub fn entities(&self, value: &str) -> String {
        encode_entities(value, self.config.entities.double_encode)
    }

    /// Convert HTML entities back to characters.
    pub fn decode(&self, value: &str) -> String {
        decode_entities(value)
    }

    /// Generate a `<script>` tag for a JavaScript file.
    pub fn script(&self, url: &str, attributes: Attributes) -> HtmlString {
        let attributes = self.with_defaults(DefaultTag::Script, attributes).set("src", url);

        self.to_html_string(format!("<script{}></script>", attributes.render()))
    }

    /// Generate a stylesheet `<link>` tag.
    pub fn style(&self, url: &str, attributes: Attributes) -> HtmlString {
        let attributes = self.with_defaults(DefaultTag::Style, attributes).set("href", url);

        self.to_html_string(format!("<link{}>", attributes.render()))
    }

    /// Generate an `<img>` tag.
    ///
    /// `alt` always replaces a caller-supplied `alt`; `None` removes it.
    pub fn image(&self, url: &str, alt: Option<&str>, attributes: Attributes) -> HtmlString {
        let attributes = attributes.set("alt", alt);

        self.to_html_string(format!("<img src=\"{}\"{}>", url, attributes.render()))
    }

    /// Generate a favicon `<link>` tag.
    pub fn favicon(&self, url: &str, attributes: Attributes) -> HtmlString {
        let attributes = self
            .with_defaults(DefaultTag::Favicon, attributes)
            .set("href", url);

        self.to_html_string(format!("<link{}>", attributes.render()))
    }

    /// Generate a `<meta>` tag.
    pub fn meta(&self, name: &str, content: &str, attributes: Attributes) -> HtmlString {
        let defaults = Attributes::new().set("name", name).set("content", content);
        let attributes = defaults.merge(attributes);

        self.to_html_string(format!("<meta{}>", attributes.render()))
    }

    /// Generate a `&nbsp;` entity `count` times.
    pub fn nbsp(&self, count: usize) -> String {
        "&nbsp;".repeat(count)
    }

    /// Generate an arbitrary tag around `content`.
    ///
    /// Content is embedded without escaping.
    pub fn tag(
        &self,
        name: &str,
        content: impl Into<TagContent>,
        attributes: Attributes,
    ) -> HtmlString {
        let content = self.to_html_string(content.into().into_string());

        self.to_html_string(format!(
            "<{name}{}>{content}</{name}>",
            attributes.render()
        ))
    }

    /// Build an attribute string.
    pub fn attributes(&self, attributes: &Attributes) -> String {
        attributes.render()
    }

    /// Build a single attribute token.
    pub fn attribute_element(&self, key: &AttrKey, value: &AttrValue) -> Option<String> {
        weft_core::attribute_element(key, value)
    }

    /// Mark a string as rendered HTML.
    pub fn to_html_string(&self, html: impl Into<String>) -> HtmlString {
        HtmlString::new(html)
    }

    fn with_defaults(&self, tag: DefaultTag, attributes: Attributes) -> Attributes {
        self.config.defaults.attributes(tag).merge(attributes)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_script() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.script("/js/app.js", Attributes::new()),
            r#"<script src="/js/app.js"></script>"#
        );
        assert_eq!(
            html.script("/js/app.js", Attributes::new().set("defer", true)),
            r#"<script defer src="/js/app.js"></script>"#
        );
    }

    #[test]
    fn test_script_url_overrides_src() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.script("/b.js", Attributes::new().set("src", "/a.js").set("async", true)),
            r#"<script src="/b.js" async></script>"#
        );
    }

    #[test]
    fn test_style_caller_overrides_defaults() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.style("/print.css", Attributes::new().set("media", "print")),
            r#"<link media="print" type="text/css" rel="stylesheet" href="/print.css">"#
        );
    }

    #[test]
    fn test_image() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.image("/logo.png", Some("Logo"), Attributes::new().set("width", 64)),
            r#"<img src="/logo.png" width="64" alt="Logo">"#
        );
        assert_eq!(
            html.image("/logo.png", None, Attributes::new().set("alt", "dropped")),
            r#"<img src="/logo.png">"#
        );
    }

    #[test]
    fn test_favicon() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.favicon("/favicon.ico", Attributes::new()),
            r#"<link rel="shortcut icon" type="image/x-icon" href="/favicon.ico">"#
        );
    }

    #[test]
    fn test_meta() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.meta("description", "A site", Attributes::new()),
            r#"<meta name="description" content="A site">"#
        );
        assert_eq!(
            html.meta(
                "robots",
                "index",
                Attributes::new().set("content", "noindex").set("lang", "en")
            ),
            r#"<meta name="robots" content="noindex" lang="en">"#
        );
    }

    #[test]
    fn test_nbsp() {
        let html = HtmlBuilder::new();
        assert_eq!(html.nbsp(3), "&nbsp;&nbsp;&nbsp;");
        assert_eq!(html.nbsp(0), "");
    }

    #[test]
    fn test_tag_with_parts() {
        let html = HtmlBuilder::new();
        assert_eq!(
            html.tag("div", vec!["<span>a</span>", "<span>b</span>"], Attributes::new()),
            "<div><span>a</span><span>b</span></div>"
        );
    }

    #[test]
    fn test_tag_does_not_escape_content() {
        let html = HtmlBuilder::new();
        assert_eq!(html.tag("td", "a & b", Attributes::new()), "<td>a & b</td>");
    }

    #[test]
    fn test_entities_and_decode() {
        let html = HtmlBuilder::new();
        assert_eq!(html.entities("<a>&amp;"), "&lt;a&gt;&amp;");
        assert_eq!(html.decode("&lt;a&gt;&amp;"), "<a>&");
    }

    #[test]
    fn test_configured_double_encode() {
        let config = Config::from_str("[entities]\ndouble_encode = true").unwrap();
        let html = HtmlBuilder::with_config(config);
        assert_eq!(html.entities("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_configured_script_defaults() {
        let config = Config::from_str("[defaults.script]\ntype = \"module\"").unwrap();
        let html = HtmlBuilder::with_config(config);
        assert_eq!(
            html.script("/app.js", Attributes::new()),
            r#"<script type="module" src="/app.js"></script>"#
        );
    }

    #[test]
    fn test_attribute_helpers() {
        let html = HtmlBuilder::new();
        let attrs = Attributes::new().set("id", "x").bare("required");
        assert_eq!(html.attributes(&attrs), r#" id="x" required"#);
        assert_eq!(
            html.attribute_element(&AttrKey::from("hidden"), &AttrValue::Flag(true)),
            Some("hidden".to_string())
        );
        assert_eq!(
            html.attribute_element(&AttrKey::from("hidden"), &AttrValue::Absent),
            None
        );
    }
}
