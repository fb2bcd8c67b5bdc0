//! Minimal HTML escaping for values interpolated into admin markup.

/// Escapes the five characters with special meaning in HTML.
///
/// Applied to every URL and label before they are interpolated into an
/// anchor tag.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
