// src/links/filter.rs
// =============================================================================
// Decides which normalized URLs are worth visiting.
//
// A URL is accepted when:
// 1. It is not empty
// 2. It looks like an http(s) URL (see URL_SHAPE below)
// 3. It does not contain any blacklisted substring
//
// The shape check is a sieve, not a validator. It only looks at the
// format of the host, so "http://300.1.1.1/" passes even though that
// address cannot exist.
//
// Rust concepts:
// - Lazy statics: the regex is compiled on first use, then shared
// - Newtype structs: Blacklist wraps a Vec so only insert can change it
// - From trait: lets the config's Vec<String> become a Blacklist
// =============================================================================

// once_cell::sync::Lazy: a static that is initialized the first time it's read
use once_cell::sync::Lazy;
// regex: the same engine the href scanner uses
use regex::Regex;

// Digits are [0-9], not \d: the regex crate's \d matches any Unicode digit
static URL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://",
        // dotted DNS name
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        // dotted quad, format only
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("URL shape pattern is valid")
});

// Substrings that permanently disqualify a URL
//
// Matching is literal `contains`, so blacklisting "https://a.test/x" also
// blocks "https://a.test/x2". Entries are only ever added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    /// True if `url` contains any entry
    pub fn is_blacklisted(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| url.contains(entry.as_str()))
    }

    pub fn insert(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for Blacklist {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

/// Syntactic http(s) check, case-insensitive on scheme and host
pub fn is_valid_url(url: &str) -> bool {
    URL_SHAPE.is_match(url)
}

/// Non-empty, well-shaped and not blacklisted
pub fn should_accept(url: &str, blacklist: &Blacklist) -> bool {
    !url.is_empty() && is_valid_url(url) && !blacklist.is_blacklisted(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blacklist_is_substring_match() {
        let blacklist = Blacklist::from(vec!["bad".to_string()]);

        assert!(!should_accept("https://x.test/bad", &blacklist));
        assert!(!should_accept("https://x.test/badpage", &blacklist));
        assert!(should_accept("https://x.test/good", &blacklist));
    }

    #[test]
    fn test_blacklist_insert() {
        let mut blacklist = Blacklist::default();
        assert!(blacklist.is_empty());
        assert!(!blacklist.is_blacklisted("https://x.test/page"));

        blacklist.insert("https://x.test/page");
        assert_eq!(blacklist.len(), 1);
        assert!(blacklist.is_blacklisted("https://x.test/page"));
        assert!(blacklist.is_blacklisted("https://x.test/page2"));
        assert!(!blacklist.is_blacklisted("https://x.test/other"));
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("http://localhost:8080/a"));
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("https://example.com/"));
        assert!(is_valid_url("HTTPS://WWW.Example.COM/path?q=1&r=2#frag"));
        assert!(is_valid_url("http://192.168.0.1:3000/x"));
        assert!(is_valid_url("http://sub.domain.example.co.uk?x=1"));
    }

    #[test]
    fn test_ip_shape_is_not_range_checked() {
        assert!(is_valid_url("http://300.1.1.1/"));
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        // Arabic-Indic digits in the address and in the port
        assert!(!is_valid_url("http://١٢٣.١.١.١/"));
        assert!(!is_valid_url("http://localhost:٨٠/a"));
        assert!(is_valid_url("http://123.1.1.1/"));
        assert!(is_valid_url("http://localhost:80/a"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url("ftp://x.test"));
        assert!(!is_valid_url("mailto:someone@x.test"));
        assert!(!is_valid_url("javascript:void(0)"));
        assert!(!is_valid_url("https://nodots/"));
        assert!(!is_valid_url("https://x.test/with space"));
        assert!(!should_accept("", &Blacklist::default()));
    }
}
