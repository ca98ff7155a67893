//! Anchors, mailto links and email obfuscation.

use weft_core::{Attributes, HtmlString};

use super::HtmlBuilder;
use crate::{UrlParams, UrlResolver, obfuscate_with};

impl HtmlBuilder {
    /// Generate an anchor.
    ///
    /// The URL is always entity-encoded. `title` defaults to the URL and is
    /// encoded only when `escape` is set.
    pub fn link(
        &self,
        url: &str,
        title: Option<&str>,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        let title = self.link_title(title.unwrap_or(url), escape);

        self.to_html_string(format!(
            "<a href=\"{}\"{}>{}</a>",
            self.entities(url),
            attributes.render(),
            title
        ))
    }

    /// Generate an anchor to an HTTPS URL.
    pub fn secure_link(
        &self,
        url: &str,
        title: Option<&str>,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        self.link(url, title, attributes, escape)
    }

    /// Generate an anchor to an asset.
    pub fn link_asset(
        &self,
        url: &str,
        title: Option<&str>,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        self.link(url, title, attributes, escape)
    }

    /// Generate an anchor to an HTTPS asset.
    pub fn link_secure_asset(
        &self,
        url: &str,
        title: Option<&str>,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        self.link_asset(url, title, attributes, escape)
    }

    /// Generate an anchor to a named route.
    pub fn link_route<R: UrlResolver + ?Sized>(
        &self,
        resolver: &R,
        name: &str,
        title: Option<&str>,
        parameters: &UrlParams,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        let url = resolver.resolve(name, parameters);
        self.link(&url, title, attributes, escape)
    }

    /// Generate an anchor to a controller action.
    pub fn link_action<R: UrlResolver + ?Sized>(
        &self,
        resolver: &R,
        action: &str,
        title: Option<&str>,
        parameters: &UrlParams,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        let url = resolver.resolve(action, parameters);
        self.link(&url, title, attributes, escape)
    }

    /// Generate an obfuscated `mailto:` anchor.
    ///
    /// `title` defaults to the plain address.
    pub fn mailto(
        &self,
        email: &str,
        title: Option<&str>,
        attributes: Attributes,
        escape: bool,
    ) -> HtmlString {
        let href = format!("{}{}", self.obfuscate("mailto:"), self.email(email));
        let title = self.link_title(title.unwrap_or(email), escape);

        self.to_html_string(format!(
            "<a href=\"{}\"{}>{}</a>",
            href,
            attributes.render(),
            title
        ))
    }

    /// Obfuscate an email address, always hiding the `@`.
    pub fn email(&self, email: &str) -> String {
        self.obfuscate(email).replace('@', "&#64;")
    }

    /// Obfuscate a string to keep scrapers from reading it.
    ///
    /// See [`obfuscate_with`] for the exact behavior.
    pub fn obfuscate(&self, value: &str) -> String {
        obfuscate_with(value, &mut rand::thread_rng())
    }

    fn link_title(&self, title: &str, escape: bool) -> String {
        if escape {
            self.entities(title)
        } else {
            title.to_string()
        }
    }
}
