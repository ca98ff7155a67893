//! Form control helpers for the weft HTML builder.
//!
//! The helpers in [`helpers`] normalize the "selected" argument and
//! synthesize ids and titles, then hand the actual markup to a
//! [`FormControls`] implementation. [`HtmlFormControls`] is the default
//! renderer built on [`HtmlBuilder`](weft_builder::HtmlBuilder).
//!
//! # Module Organization
//!
//! - [`helpers`] - `build_select`, `build_radios`, `build_checkboxes`
//! - [`FormControls`] - Rendering seam for select, radio and checkbox inputs
//! - [`HtmlFormControls`] - Default renderer
//! - [`testing`] - Test doubles (feature-gated)

mod controls;
pub mod helpers;
mod html_controls;
mod options;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controls::FormControls;
pub use helpers::{build_checkboxes, build_radios, build_select};
pub use html_controls::HtmlFormControls;
pub use options::{Choices, SelectAttributes, SelectEntry, SelectOptions, choices};
