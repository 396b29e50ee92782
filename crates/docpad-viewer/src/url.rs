//! Validation of user-entered document URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Optional http(s) scheme, a dotted hostname with an alphabetic TLD or an
/// IPv4 address, then optional port, path, query and fragment.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i-u)^(https?://)?",
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|",
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",
        r"(\?[;&a-z0-9%_.~+=-]*)?",
        r"(#[-a-z0-9_]*)?$",
    ))
    .unwrap()
});

/// Check that `input` is a syntactically well-formed document URL.
///
/// The scheme is optional; the host is not. `localhost` and other
/// single-label hosts are rejected.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    URL_RE.is_match(input)
}

/// Turn a validated input into the URL that is actually requested.
///
/// Scheme-less input is fetched over HTTPS.
#[must_use]
pub fn fetch_url(input: &str) -> String {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_owned()
    } else {
        format!("https://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/docs.json"));
        assert!(is_valid_url("https://api.example.co.uk:8443/v1/docs.json?x=1&y=2#top"));
        assert!(is_valid_url("https://raw.githubusercontent.com/org/repo/main/docs.json"));
    }

    #[test]
    fn test_accepts_scheme_less_and_ip() {
        assert!(is_valid_url("example.com/docs.json"));
        assert!(is_valid_url("192.168.1.10:8080/docs"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("/docs.json"));
        assert!(!is_valid_url("https:///docs.json"));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(!is_valid_url("localhost:3000"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://-bad.com"));
        assert!(!is_valid_url("https://example.c"));
        assert!(!is_valid_url(" https://example.com"));
        assert!(!is_valid_url("https://example.com/a b"));
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        assert!(!is_valid_url("https://example\u{17f}.com"));
        assert!(!is_valid_url("https://\u{212a}ey.example.com"));
        assert!(!is_valid_url("https://example.com/\u{e9}t\u{e9}"));
    }

    #[test]
    fn test_fetch_url_adds_https() {
        assert_eq!(fetch_url("example.com/docs.json"), "https://example.com/docs.json");
    }

    #[test]
    fn test_fetch_url_keeps_scheme() {
        assert_eq!(fetch_url("http://example.com"), "http://example.com");
        assert_eq!(fetch_url("HTTPS://example.com"), "HTTPS://example.com");
    }

    #[test]
    fn test_fetch_url_short_input() {
        assert_eq!(fetch_url("a.io"), "https://a.io");
    }
}
