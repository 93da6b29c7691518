//! HTML and XML escaping helpers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROOT_RELATIVE_ATTR: Regex =
        Regex::new(r#"(href|src)=(["'])/([^/])"#).expect("valid regex");
    static ref TAG: Regex = Regex::new(r"<[^>]*>").expect("valid regex");
}

/// Escape text for an HTML text node
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for a double-quoted HTML attribute
pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

/// Escape text for XML character data and attributes
pub fn escape_xml(s: &str) -> String {
    escape_attr(s).replace('\'', "&apos;")
}

/// Strip HTML tags from content
pub fn strip_html(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Rewrite root-relative `href`/`src` attributes against `base_url`.
/// Protocol-relative `//host` URLs are left alone.
pub fn absolutize_urls(html: &str, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    ROOT_RELATIVE_ATTR
        .replace_all(html, |caps: &regex::Captures| {
            format!("{}={}{}/{}", &caps[1], &caps[2], base, &caps[3])
        })
        .into_owned()
}

/// Strip characters XML 1.0 does not allow
pub fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}
