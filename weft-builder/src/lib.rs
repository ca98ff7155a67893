//! HTML tag and element builder.
//!
//! [`HtmlBuilder`] generates the small fragments view code needs: script and
//! stylesheet tags, images, links, obfuscated mailto links, nested lists,
//! description lists and arbitrary tags. Every operation returns an
//! [`HtmlString`](weft_core::HtmlString).
//!
//! # Module Organization
//!
//! - [`HtmlBuilder`] - Tag, link and list operations
//! - [`ListTree`] / [`DescriptionList`] - Input structures for list rendering
//! - [`TagContent`] - Content of a generic tag
//! - [`UrlResolver`] - Seam to the application's route/URL generator
//! - [`obfuscate_with`] - Email obfuscation with an explicit RNG

mod builder;
mod content;
mod description;
mod list;
mod obfuscate;
mod url;

pub use builder::HtmlBuilder;
pub use content::TagContent;
pub use description::DescriptionList;
pub use list::{ListItem, ListKey, ListTree};
pub use obfuscate::obfuscate_with;
pub use url::{UrlParams, UrlResolver};
