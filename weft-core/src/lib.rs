//! Core types for the weft HTML builder.
//!
//! This crate provides the fundamental types shared by the builder and the
//! form helpers:
//!
//! - [`HtmlString`] - Rendered markup that must not be escaped again
//! - [`Attributes`] - Ordered attribute map and its serializer
//! - [`encode_entities`] / [`decode_entities`] - HTML entity conversion
//! - [`Values`] / [`Selection`] - "one or many" values and their normalization

mod attributes;
mod entities;
mod error;
mod html;
mod values;

// Attribute map and serializer
pub use attributes::{
    AttrKey, AttrValue, Attributes, attribute_element, is_valid_attribute_name, positional_index,
};
// Entity conversion
pub use entities::{decode_entities, encode_entities};
pub use error::{Error, Result};
// Fundamental types
pub use html::HtmlString;
pub use values::{Selection, Values};
