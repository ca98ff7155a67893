//! HTML entity encoding and decoding.
//!
//! Encoding covers the markup-significant characters, both quote styles and
//! every character with an HTML 4.01 named entity. Decoding understands the
//! same named entities plus decimal and hexadecimal references.
//!
//! The two are not exact inverses: `&#39;` decodes to `'`, which encodes
//! back as `&#039;`.

mod table;

/// Encode `value` with HTML entities.
///
/// With `double_encode` off, an `&` that already starts a valid character
/// reference is kept as-is, so `&amp;` stays `&amp;`. With it on, every `&`
/// becomes `&amp;`.
///
/// # Example
///
/// ```
/// use weft_core::encode_entities;
///
/// assert_eq!(encode_entities("<a href='x'>", false), "&lt;a href=&#039;x&#039;&gt;");
/// assert_eq!(encode_entities("caf\u{e9} &amp;", false), "caf&eacute; &amp;");
/// assert_eq!(encode_entities("&amp;", true), "&amp;amp;");
/// ```
pub fn encode_entities(value: &str, double_encode: bool) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        if c == '&' && !double_encode {
            if let Some((_, len)) = parse_reference(rest) {
                out.push_str(&rest[..len]);
                rest = &rest[len..];
                continue;
            }
        }

        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#039;"),
            c => match table::name_of(c) {
                Some(name) => {
                    out.push('&');
                    out.push_str(name);
                    out.push(';');
                }
                None => out.push(c),
            },
        }
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// Decode named, decimal and hexadecimal character references.
///
/// Unknown names and malformed references are left untouched.
///
/// # Example
///
/// ```
/// use weft_core::decode_entities;
///
/// assert_eq!(decode_entities("&lt;p&gt; &amp;amp; &#64; &#x41;"), "<p> &amp; @ A");
/// assert_eq!(decode_entities("&bogus; &#0;"), "&bogus; &#0;");
/// ```
pub fn decode_entities(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match parse_reference(rest) {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Longest reference body worth scanning, `;` included.
///
/// Covers every named entity and zero-padded numeric references.
const MAX_REFERENCE_BODY: usize = 32;

/// Parse a character reference at the start of `s` (which begins with `&`).
///
/// Returns the referenced character and the byte length of the reference,
/// including the trailing `;`.
fn parse_reference(s: &str) -> Option<(char, usize)> {
    let body = s.strip_prefix('&')?;
    // `;` is ASCII, so the byte position is a char boundary
    let end = body
        .bytes()
        .take(MAX_REFERENCE_BODY)
        .position(|b| b == b';')?;
    let token = &body[..end];
    let len = end + 2;

    let c = if let Some(number) = token.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) if is_all(hex, |c| c.is_ascii_hexdigit()) => u32::from_str_radix(hex, 16),
            None if is_all(number, |c| c.is_ascii_digit()) => number.parse::<u32>(),
            _ => return None,
        }
        .ok()?;
        if code == 0 {
            return None;
        }
        char::from_u32(code)?
    } else if is_all(token, |c| c.is_ascii_alphanumeric()) {
        table::char_of(token)?
    } else {
        return None;
    };

    Some((c, len))
}

fn is_all(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}
