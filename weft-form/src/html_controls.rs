//! Default form control renderer.

use weft_builder::HtmlBuilder;
use weft_core::{Attributes, HtmlString, Selection};

use crate::{FormControls, SelectAttributes, SelectEntry, SelectOptions};

/// Renders form controls with an [`HtmlBuilder`].
///
/// Values and labels are entity-encoded; names and caller attributes are
/// emitted as given.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormControls {
    html: HtmlBuilder,
}

impl HtmlFormControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured builder for rendering.
    pub fn with_builder(html: HtmlBuilder) -> Self {
        Self { html }
    }

    fn input(
        &self,
        kind: &str,
        name: &str,
        value: &str,
        checked: bool,
        attributes: Attributes,
    ) -> HtmlString {
        let attributes = Attributes::new()
            .set("name", name)
            .set("type", kind)
            .set("value", self.html.entities(value))
            .set("checked", checked)
            .merge(attributes);

        self.html
            .to_html_string(format!("<input{}>", attributes.render()))
    }

    fn option(
        &self,
        value: &str,
        label: &str,
        selected: &Selection,
        attributes: &SelectAttributes,
    ) -> String {
        let own = attributes.options.get(value).cloned().unwrap_or_default();
        let option = Attributes::new()
            .set("value", self.html.entities(value))
            .set("selected", selected.contains(value))
            .merge(own);

        format!(
            "<option{}>{}</option>",
            option.render(),
            self.html.entities(label)
        )
    }
}

impl FormControls for HtmlFormControls {
    fn select(
        &self,
        name: &str,
        options: &SelectOptions,
        selected: &Selection,
        attributes: &SelectAttributes,
    ) -> HtmlString {
        let select = Attributes::new()
            .set("name", name)
            .merge(attributes.select.clone());
        let mut html = format!("<select{}>", select.render());

        for (key, entry) in options.iter() {
            match entry {
                SelectEntry::Choice(label) => {
                    html.push_str(&self.option(key, label, selected, attributes));
                }
                SelectEntry::Group(choices) => {
                    let own = attributes.optgroups.get(key).cloned().unwrap_or_default();
                    let group = Attributes::new()
                        .set("label", self.html.entities(key))
                        .merge(own);

                    html.push_str(&format!("<optgroup{}>", group.render()));
                    for (value, label) in choices {
                        html.push_str(&self.option(value, label, selected, attributes));
                    }
                    html.push_str("</optgroup>");
                }
            }
        }

        html.push_str("</select>");
        self.html.to_html_string(html)
    }

    fn radio(&self, name: &str, value: &str, checked: bool, attributes: Attributes) -> HtmlString {
        self.input("radio", name, value, checked, attributes)
    }

    fn checkbox(
        &self,
        name: &str,
        value: &str,
        checked: bool,
        attributes: Attributes,
    ) -> HtmlString {
        self.input("checkbox", name, value, checked, attributes)
    }
}
