//! Escaping of user-supplied text for the two Typst output contexts.
//!
//! Both functions are total and operate in a single left-to-right scan over
//! the original characters, so a backslash inserted by the scan is never
//! itself re-escaped. Escaping is not idempotent: applying it twice
//! double-escapes, so callers escape raw text exactly once.

/// Characters that are structurally significant in Typst content blocks.
const CONTENT_SPECIALS: &[char] = &[
    '\\', '#', '$', '*', '_', '~', '^', '"', '[', ']', '{', '}', '<', '>',
];

/// Characters that terminate or alter a Typst string literal.
const STRING_SPECIALS: &[char] = &['\\', '"'];

/// Typographic double quotes normalized to a straight quote before escaping.
fn normalize_quote(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => '"',
        other => other,
    }
}

fn escape_with(text: &str, specials: &[char]) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars().map(normalize_quote) {
        if specials.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes text for placement inside a Typst content block (unquoted).
///
/// Trims surrounding whitespace, normalizes curly double quotes to `"`, then
/// prefixes a backslash to every occurrence of
/// `\ # $ * _ ~ ^ " [ ] { } < >`.
pub fn escape_content(text: &str) -> String {
    escape_with(text, CONTENT_SPECIALS)
}

/// Escapes text for placement inside a quoted Typst string literal.
///
/// Same trimming and quote normalization as [`escape_content`], but only `\`
/// and `"` are escaped; markup characters are inert inside a string.
pub fn escape_string(text: &str) -> String {
    escape_with(text, STRING_SPECIALS)
}

/// [`escape_content`] over an optional field; absent text renders as empty.
pub fn escape_content_opt(text: Option<&str>) -> String {
    text.map(escape_content).unwrap_or_default()
}

/// [`escape_string`] over an optional field; absent text renders as empty.
pub fn escape_string_opt(text: Option<&str>) -> String {
    text.map(escape_string).unwrap_or_default()
}
