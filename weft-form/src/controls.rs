//! Rendering seam for form inputs.

use weft_core::{Attributes, HtmlString, Selection};

use crate::{SelectAttributes, SelectOptions};

/// Renders individual form controls.
///
/// The helper functions decide which values are selected and which
/// attributes each control gets; implementations only produce markup.
pub trait FormControls {
    /// Render a `<select>` with its options.
    fn select(
        &self,
        name: &str,
        options: &SelectOptions,
        selected: &Selection,
        attributes: &SelectAttributes,
    ) -> HtmlString;

    /// Render a radio input.
    fn radio(&self, name: &str, value: &str, checked: bool, attributes: Attributes) -> HtmlString;

    /// Render a checkbox input.
    fn checkbox(&self, name: &str, value: &str, checked: bool, attributes: Attributes)
    -> HtmlString;
}
