//! Normalization of untrusted strings into plain text and keys.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*?>.*?</script>|<style[^>]*?>.*?</style>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t ]+").unwrap());
static OCTET: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[a-fA-F0-9]{2}").unwrap());
static SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Reduce user input to a single line of plain text.
///
/// Drops `<script>`/`<style>` blocks with their content, strips every other
/// tag, collapses whitespace runs to one space, removes percent-encoded
/// octets and trims.
pub fn sanitize_text_field(raw: &str) -> String {
    let mut text = raw.to_string();

    if text.contains('<') {
        text = SCRIPT_STYLE.replace_all(&text, "").into_owned();
        text = TAG.replace_all(&text, "").into_owned();
    }

    text = WHITESPACE.replace_all(&text, " ").trim().to_string();

    let mut stripped_octets = false;
    while OCTET.is_match(&text) {
        text = OCTET.replace_all(&text, "").into_owned();
        stripped_octets = true;
    }
    if stripped_octets {
        text = SPACES.replace_all(&text, " ").trim().to_string();
    }

    text
}

/// Normalize a string to the key alphabet: lowercase ASCII letters, digits,
/// `_` and `-`. Everything else is dropped, never rejected.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}
