//! Ordered, unordered and description lists.

use weft_core::{Attributes, HtmlString};

use super::HtmlBuilder;
use crate::{DescriptionList, ListItem, ListKey, ListTree};

impl HtmlBuilder {
    /// Generate an ordered list.
    pub fn ol(&self, list: &ListTree, attributes: Attributes) -> HtmlString {
        self.listing("ol", list, attributes)
    }

    /// Generate an unordered list.
    pub fn ul(&self, list: &ListTree, attributes: Attributes) -> HtmlString {
        self.listing("ul", list, attributes)
    }

    /// Generate a description list.
    ///
    /// Each term becomes a `<dt>` followed by one `<dd>` per definition.
    pub fn dl(&self, list: &DescriptionList, attributes: Attributes) -> HtmlString {
        let mut html = format!("<dl{}>", attributes.render());

        for (term, definitions) in list.iter() {
            html.push_str(&format!("<dt>{}</dt>", term));
            for definition in definitions {
                html.push_str(&format!("<dd>{}</dd>", definition));
            }
        }

        html.push_str("</dl>");
        self.to_html_string(html)
    }

    /// Generate a list element of type `tag`.
    ///
    /// An empty list renders nothing at all, not even the wrapping tag.
    pub fn listing(&self, tag: &str, list: &ListTree, attributes: Attributes) -> HtmlString {
        if list.is_empty() {
            return HtmlString::default();
        }

        let html: String = list
            .iter()
            .map(|(key, item)| self.listing_element(key, tag, item))
            .collect();

        self.to_html_string(format!("<{tag}{}>{html}</{tag}>", attributes.render()))
    }

    /// Render one entry of a listing.
    pub fn listing_element(&self, key: &ListKey, tag: &str, item: &ListItem) -> String {
        match item {
            ListItem::Leaf(text) => format!("<li>{}</li>", text),
            ListItem::Branch(list) => self.nested_listing(key, tag, list),
        }
    }

    /// Render a nested list.
    ///
    /// Under a positional key the nested list is emitted as a sibling;
    /// under a label it is wrapped as `<li>label…</li>`.
    pub fn nested_listing(&self, key: &ListKey, tag: &str, list: &ListTree) -> String {
        tracing::trace!(?key, tag, entries = list.len(), "rendering nested listing");

        let nested = self.listing(tag, list, Attributes::new());
        match key {
            ListKey::Index(_) => nested.into_string(),
            ListKey::Label(label) => format!("<li>{}{}</li>", label, nested),
        }
    }
}
