//! HTML fragment helpers for view code.
//!
//! `weft` bundles the workspace crates behind one dependency:
//!
//! - [`HtmlBuilder`] - Tags, links, mailto links and lists
//! - [`helpers`] - `build_select`, `build_radios`, `build_checkboxes`
//! - [`Attributes`] / [`HtmlString`] - Attribute maps and rendered markup
//! - [`Config`] - `weft.toml` loading
//!
//! # Example
//!
//! ```
//! use weft::prelude::*;
//!
//! let html = HtmlBuilder::new();
//! let nav = html.ul(
//!     &ListTree::new().item("Home").group("Docs", ListTree::from_iter(["Guide"])),
//!     Attributes::new().set("class", "nav"),
//! );
//! assert_eq!(
//!     nav.as_str(),
//!     r#"<ul class="nav"><li>Home</li><li>Docs<ul><li>Guide</li></ul></li></ul>"#
//! );
//!
//! let radios = build_radios(
//!     &HtmlFormControls::new(),
//!     "plan",
//!     &choices([("free", "Free")]),
//!     None,
//!     &Attributes::new(),
//! );
//! assert_eq!(
//!     radios.as_str(),
//!     r#"<input name="plan" type="radio" value="free" checked id="plan-free" title="Free">"#
//! );
//! ```

pub use weft_builder::{
    DescriptionList, HtmlBuilder, ListItem, ListKey, ListTree, TagContent, UrlParams,
    UrlResolver, obfuscate_with,
};
pub use weft_config::{CONFIG_FILE_NAME, Config, DefaultTag, EntitiesConfig};
pub use weft_core::{
    AttrKey, AttrValue, Attributes, HtmlString, Selection, Values, decode_entities,
    encode_entities,
};
pub use weft_form::{
    Choices, FormControls, HtmlFormControls, SelectAttributes, SelectEntry, SelectOptions,
    choices, helpers,
};

/// Errors from the workspace crates.
pub mod error {
    pub use weft_config::Error as ConfigError;
    pub use weft_core::Error as ShapeError;
}

/// Everything view code usually needs.
pub mod prelude {
    pub use weft_builder::{DescriptionList, HtmlBuilder, ListTree, UrlParams, UrlResolver};
    pub use weft_core::{Attributes, HtmlString, Values};
    pub use weft_form::{
        Choices, HtmlFormControls, SelectAttributes, SelectOptions, build_checkboxes,
        build_radios, build_select, choices,
    };
}
