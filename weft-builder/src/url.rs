//! URL resolution seam.

use indexmap::IndexMap;

/// Ordered route or action parameters.
pub type UrlParams = IndexMap<String, String>;

/// Resolves a route name or controller action to a URL.
///
/// Routing lives in the application; the builder only needs the final URL
/// for [`link_route`](crate::HtmlBuilder::link_route) and
/// [`link_action`](crate::HtmlBuilder::link_action). Closures can be used
/// directly.
///
/// # Example
///
/// ```
/// use weft_builder::{UrlParams, UrlResolver};
///
/// let resolver = |name: &str, params: &UrlParams| match params.get("id") {
///     Some(id) => format!("/{}/{}", name, id),
///     None => format!("/{}", name),
/// };
///
/// let mut params = UrlParams::new();
/// params.insert("id".into(), "7".into());
/// assert_eq!(resolver.resolve("users", &params), "/users/7");
/// ```
pub trait UrlResolver {
    fn resolve(&self, target: &str, parameters: &UrlParams) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str, &UrlParams) -> String,
{
    fn resolve(&self, target: &str, parameters: &UrlParams) -> String {
        self(target, parameters)
    }
}
