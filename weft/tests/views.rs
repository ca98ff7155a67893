//! End-to-end tests rendering typical view fragments.

use std::io::Write;

use weft::{Config, prelude::*};
use weft_form::testing::{ControlCall, RecordingControls};

#[test]
fn test_signup_form_fragments() {
    let controls = HtmlFormControls::new();

    let country = build_select(
        &controls,
        "country",
        &SelectOptions::new()
            .option("", "Choose")
            .group("Europe", choices([("fr", "France"), ("de", "Germany")])),
        Some(Values::from("de")),
        &SelectAttributes::for_select(Attributes::new().bare("required")),
    );
    insta::assert_snapshot!(
        country,
        @r#"<select name="country" required><option value="">Choose</option><optgroup label="Europe"><option value="fr">France</option><option value="de" selected>Germany</option></optgroup></select>"#
    );

    let plan = build_radios(
        &controls,
        "plan",
        &choices([("free", "Free"), ("pro", "Pro")]),
        None,
        &Attributes::new().set("class", "plan"),
    );
    insta::assert_snapshot!(
        plan,
        @r#"<input name="plan" type="radio" value="free" checked id="plan-free" title="Free" class="plan"> <input name="plan" type="radio" value="pro" id="plan-pro" title="Pro" class="plan">"#
    );

    let topics = build_checkboxes(
        &controls,
        "topics",
        &choices([("rust", "Rust"), ("web", "Web")]),
        Some(Values::from(vec!["web"])),
        &Attributes::new(),
    );
    insta::assert_snapshot!(
        topics,
        @r#"<input name="topics" type="checkbox" value="rust" id="topics-rust" title="Rust"> <input name="topics" type="checkbox" value="web" checked id="topics-web" title="Web">"#
    );
}

#[test]
fn test_helpers_join_with_single_space() {
    let controls = RecordingControls::new();
    let html = build_checkboxes(
        &controls,
        "x",
        &choices([("1", "One"), ("2", "Two"), ("3", "Three")]),
        Some("2".into()),
        &Attributes::new(),
    );

    assert_eq!(html, "checkbox:x=1 checkbox:x=2 checkbox:x=3");
    match &controls.calls()[1] {
        ControlCall::Checkbox {
            checked,
            attributes,
            ..
        } => {
            assert!(*checked);
            assert_eq!(attributes.render(), r#" id="x-2" title="Two""#);
        }
        other => panic!("unexpected call: {other:?}"),
    }
}

#[test]
fn test_config_file_drives_builder() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[entities]
double_encode = true

[defaults.style]
rel = "stylesheet"
"#
    )
    .unwrap();

    let html = HtmlBuilder::with_config(Config::from_file(file.path()).unwrap());

    assert_eq!(
        html.style("/app.css", Attributes::new()),
        r#"<link rel="stylesheet" href="/app.css">"#
    );
    assert_eq!(
        html.link("/", Some("&copy; Us"), Attributes::new(), true),
        r#"<a href="/">&amp;copy; Us</a>"#
    );
}

#[test]
fn test_mailto_round_trips_through_decode() {
    let html = HtmlBuilder::new();
    let link = html.mailto("team@example.org", Some("Write us"), Attributes::new(), true);

    let decoded = html.decode(link.as_str());
    assert_eq!(
        decoded,
        r#"<a href="mailto:team@example.org">Write us</a>"#
    );
}

#[test]
fn test_attributes_from_json() {
    let html = HtmlBuilder::new();
    let attrs = Attributes::try_from(serde_json_value()).unwrap();
    assert_eq!(
        html.tag("button", "Save", attrs),
        r#"<button type="submit" class="btn btn-primary" disabled>Save</button>"#
    );
}

fn serde_json_value() -> serde_json::Value {
    serde_json::json!({
        "type": "submit",
        "class": ["btn", "btn-primary"],
        "disabled": true,
        "form": null
    })
}
