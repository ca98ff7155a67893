//! Post-parse validation of configuration values.

use miette::SourceSpan;
use weft_core::is_valid_attribute_name;

use crate::{Config, DefaultTag, Result, error::SourceContext};

/// Check every configured default attribute name.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    for tag in DefaultTag::ALL {
        for name in config.defaults.table(tag).keys() {
            if !is_valid_attribute_name(name) {
                return Err(ctx.invalid_attribute_error(
                    name.as_str(),
                    tag.as_str(),
                    find_key_span(ctx.src(), tag.as_str(), name),
                ));
            }
        }
    }
    Ok(())
}

/// Find the span of a key inside its `[defaults.<tag>]` table.
///
/// Keys that fail validation are always quoted in TOML, so the quoted form
/// is searched between the table header and the next table. Headers written
/// any other way yield no span.
pub(crate) fn find_key_span(src: &str, tag: &str, name: &str) -> Option<SourceSpan> {
    let header = format!("[defaults.{}]", tag);
    let offset = src.find(&header)? + header.len();
    let body = &src[offset..];
    let end = body
        .match_indices('\n')
        .map(|(i, _)| i)
        .find(|&i| body[i + 1..].trim_start_matches([' ', '\t']).starts_with('['))
        .unwrap_or(body.len());
    let section = &body[..end];

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = section.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((offset + pos + 1, name.len())));
        }
    }

    // No fallback: a span on the wrong key is worse than none
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span_in_section() {
        let src = "[defaults.style]\n\"bad key\" = \"x\"\n";
        let span = find_key_span(src, "style", "bad key").unwrap();
        assert_eq!(span.offset(), 18);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_find_key_span_prefers_matching_section() {
        let src = "[defaults.script]\n\"a b\" = \"1\"\n[defaults.style]\n\"a b\" = \"2\"\n";
        let span = find_key_span(src, "style", "a b").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "a b");
        assert!(span.offset() > src.find("[defaults.style]").unwrap());
    }

    #[test]
    fn test_find_key_span_ignores_later_sections() {
        let src = "[defaults.style]\nrel = \"x\"\n[defaults.favicon]\n\"a b\" = \"1\"\n";
        assert!(find_key_span(src, "style", "a b").is_none());
    }

    #[test]
    fn test_find_key_span_unrecognized_header() {
        let src = "[defaults.script]\n\"a b\" = \"1\"\n[ defaults.style ]\n\"a b\" = \"2\"\n";
        assert!(find_key_span(src, "style", "a b").is_none());

        let inline = "defaults = { script = { \"a b\" = \"1\" } }\n";
        assert!(find_key_span(inline, "script", "a b").is_none());
    }

    #[test]
    fn test_find_key_span_missing() {
        assert!(find_key_span("[entities]\n", "style", "x y").is_none());
    }
}
