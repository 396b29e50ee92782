//! HTML escaping and URL sanitizing helpers.

/// URL schemes allowed in rendered links and images.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Check whether a link target is safe to emit as `href`/`src`.
///
/// Relative URLs and fragments are always safe. Absolute URLs are safe only
/// for [`ALLOWED_SCHEMES`]. Browsers ignore tabs and newlines inside URLs, so
/// those are stripped before the scheme is inspected.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    let scheme_end = cleaned.find(':');
    let path_start = cleaned.find(['/', '?', '#']);

    match (scheme_end, path_start) {
        // No colon, or colon appears after the path starts: relative URL
        (None, _) => true,
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => {
            let scheme = cleaned[..colon].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
    }
}
