//! Tests for loading weft.toml from strings and files.

use std::{io::Write, str::FromStr};

use weft_config::{Config, DefaultTag, Error};

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_str("").expect("empty config should parse");
    assert_eq!(config, Config::default());
}

#[test]
fn test_entities_section() {
    let config = Config::from_str(
        r#"
        [entities]
        double_encode = true
        "#,
    )
    .unwrap();
    assert!(config.entities.double_encode);
}

#[test]
fn test_section_replaces_builtin_defaults() {
    let config = Config::from_str(
        r#"
        [defaults.style]
        rel = "stylesheet"
        media = "screen"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.defaults.attributes(DefaultTag::Style).render(),
        r#" rel="stylesheet" media="screen""#
    );
    // Untouched sections keep their built-in values
    assert_eq!(
        config.defaults.attributes(DefaultTag::Favicon).render(),
        r#" rel="shortcut icon" type="image/x-icon""#
    );
}

#[test]
fn test_script_defaults() {
    let config = Config::from_str(
        r#"
        [defaults.script]
        defer = "defer"
        type = "module"
        "#,
    )
    .unwrap();
    assert_eq!(
        config.defaults.attributes(DefaultTag::Script).render(),
        r#" defer="defer" type="module""#
    );
}

#[test]
fn test_unknown_field_is_parse_error() {
    let err = Config::from_str(
        r#"
        [entities]
        double_encoding = true
        "#,
    )
    .unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_invalid_attribute_name() {
    let src = "[defaults.favicon]\n\"on click\" = \"x\"\n";
    let err = Config::from_str_with_filename(src, "site.toml").unwrap_err();

    match *err {
        Error::InvalidAttributeName {
            ref name,
            ref tag,
            span,
            ..
        } => {
            assert_eq!(name, "on click");
            assert_eq!(tag, "favicon");
            let span = span.expect("span should point at the key");
            assert_eq!(&src[span.offset()..span.offset() + span.len()], "on click");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_message() {
    let err = Config::from_str("[defaults.style]\n\"a=b\" = \"1\"\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid attribute name 'a=b' in [defaults.style]"
    );
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[entities]\ndouble_encode = true").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.entities.double_encode);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weft.toml");

    let err = Config::from_file(&path).unwrap_err();
    match *err {
        Error::Io { path: ref p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other:?}"),
    }
}
