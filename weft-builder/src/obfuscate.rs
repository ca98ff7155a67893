//! Randomized character-reference obfuscation.

use rand::Rng;

/// Obfuscate `value` using the given random source.
///
/// Each character is randomly written as a decimal reference, a hexadecimal
/// reference or itself, so the result decodes back to the input but rarely
/// contains it verbatim.
///
/// At the first non-ASCII character the function returns only that
/// character and drops the rest of the input. Existing markup depends on
/// this output, so it is kept.
///
/// # Example
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use weft_builder::obfuscate_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let out = obfuscate_with("a", &mut rng);
/// assert!(["&#97;", "&#x61;", "a"].contains(&out.as_str()));
/// ```
pub fn obfuscate_with<R: Rng>(value: &str, rng: &mut R) -> String {
    let mut safe = String::with_capacity(value.len() * 6);

    for letter in value.chars() {
        if !letter.is_ascii() {
            tracing::warn!(
                character = %letter,
                "obfuscation stopped at a non-ASCII character; the rest of the input is dropped"
            );
            return letter.to_string();
        }

        let code = letter as u32;
        match rng.gen_range(0..3) {
            0 => safe.push_str(&format!("&#{};", code)),
            1 => safe.push_str(&format!("&#x{:x};", code)),
            _ => safe.push(letter),
        }
    }

    safe
}
