//! Output escaping helpers for server-rendered admin HTML.

use serde::Serialize;

/// Escape text for an HTML text node or a quoted attribute value
pub fn esc_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build `{base}?k1=v1&k2=v2` with every value percent-encoded
pub fn url_with_query(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// Serialize a value as a JavaScript expression safe to inline in `<script>`
pub fn inline_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?;
    // `</` would let a string value close the surrounding script element
    Ok(json.replace("</", "<\\/"))
}
