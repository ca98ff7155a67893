//! Select, radio group and checkbox group helpers.
//!
//! These are stateless functions over a [`FormControls`] renderer. Their job
//! is to normalize the selected values and to give every radio or checkbox
//! an `id` of the form `{name}-{value}` and a `title` equal to its label.

use weft_core::{Attributes, HtmlString, Selection, Values};

use crate::{Choices, FormControls, SelectAttributes, SelectOptions};

/// Generate a select box.
///
/// A scalar `selected` is split on commas, so `"a,b"` selects both.
pub fn build_select<C: FormControls + ?Sized>(
    controls: &C,
    name: &str,
    options: &SelectOptions,
    selected: Option<Values>,
    attributes: &SelectAttributes,
) -> HtmlString {
    let selected = Selection::normalize(selected);
    controls.select(name, options, &selected, attributes)
}

/// Generate a group of radio buttons, joined by single spaces.
///
/// Without a selection the first choice is checked.
pub fn build_radios<C: FormControls + ?Sized>(
    controls: &C,
    name: &str,
    list: &Choices,
    selected: Option<Values>,
    options: &Attributes,
) -> HtmlString {
    let selected =
        selected.or_else(|| list.keys().next().map(|first| Values::Sequence(vec![first.clone()])));

    render_group(name, list, Selection::normalize(selected), options, |value, checked, attrs| {
        controls.radio(name, value, checked, attrs)
    })
}

/// Generate a group of checkboxes, joined by single spaces.
///
/// Without a selection nothing is checked.
pub fn build_checkboxes<C: FormControls + ?Sized>(
    controls: &C,
    name: &str,
    list: &Choices,
    selected: Option<Values>,
    options: &Attributes,
) -> HtmlString {
    render_group(name, list, Selection::normalize(selected), options, |value, checked, attrs| {
        controls.checkbox(name, value, checked, attrs)
    })
}

fn render_group<F>(
    name: &str,
    list: &Choices,
    selected: Selection,
    options: &Attributes,
    render: F,
) -> HtmlString
where
    F: Fn(&str, bool, Attributes) -> HtmlString,
{
    let inputs: Vec<String> = list
        .iter()
        .map(|(value, label)| {
            // Generated id and title take precedence over caller options
            let attributes = Attributes::new()
                .set("id", format!("{}-{}", name, value))
                .set("title", label)
                .union(options.clone());
            render(value.as_str(), selected.contains(value), attributes).into_string()
        })
        .collect();

    HtmlString::new(inputs.join(" "))
}
