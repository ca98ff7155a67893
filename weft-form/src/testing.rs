//! Test utilities for code that renders form controls.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::cell::RefCell;

use weft_core::{Attributes, HtmlString, Selection};

use crate::{FormControls, SelectAttributes, SelectOptions};

/// A call received by [`RecordingControls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCall {
    Select {
        name: String,
        selected: Vec<String>,
    },
    Radio {
        name: String,
        value: String,
        checked: bool,
        attributes: Attributes,
    },
    Checkbox {
        name: String,
        value: String,
        checked: bool,
        attributes: Attributes,
    },
}

/// [`FormControls`] double that records every call.
///
/// Rendered output is a short marker such as `radio:color=red`, so callers
/// can still check how results are joined.
#[derive(Debug, Default)]
pub struct RecordingControls {
    calls: RefCell<Vec<ControlCall>>,
}

impl RecordingControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<ControlCall> {
        self.calls.borrow().clone()
    }

    /// Values of the radio and checkbox calls that were checked.
    pub fn checked_values(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ControlCall::Radio {
                    value,
                    checked: true,
                    ..
                }
                | ControlCall::Checkbox {
                    value,
                    checked: true,
                    ..
                } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ControlCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl FormControls for RecordingControls {
    fn select(
        &self,
        name: &str,
        _options: &SelectOptions,
        selected: &Selection,
        _attributes: &SelectAttributes,
    ) -> HtmlString {
        self.record(ControlCall::Select {
            name: name.to_string(),
            selected: selected.as_slice().to_vec(),
        });
        HtmlString::new(format!("select:{}", name))
    }

    fn radio(&self, name: &str, value: &str, checked: bool, attributes: Attributes) -> HtmlString {
        self.record(ControlCall::Radio {
            name: name.to_string(),
            value: value.to_string(),
            checked,
            attributes,
        });
        HtmlString::new(format!("radio:{}={}", name, value))
    }

    fn checkbox(
        &self,
        name: &str,
        value: &str,
        checked: bool,
        attributes: Attributes,
    ) -> HtmlString {
        self.record(ControlCall::Checkbox {
            name: name.to_string(),
            value: value.to_string(),
            checked,
            attributes,
        });
        HtmlString::new(format!("checkbox:{}={}", name, value))
    }
}
