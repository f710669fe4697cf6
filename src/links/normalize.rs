// src/links/normalize.rs
// =============================================================================
// Converts links found in a page into absolute URLs.
//
// Three shapes are handled:
// - "//host/path"      scheme-relative, borrows the scheme of the base URL
// - "https://host/..." already absolute, returned exactly as written
// - "/path", "../x"    relative, resolved against the base URL
//
// Anything we cannot make sense of comes back as None and is dropped.
//
// Rust concepts:
// - Option<T> and `?`: inside a function returning Option, `?` on a None
//   returns None right away
// - Matching on an error variant: ParseError tells us whether a link
//   was relative or simply broken
// =============================================================================

use url::{ParseError, Url};  // ParseError::RelativeUrlWithoutBase marks a relative link

// Resolves `link` against `base` into an absolute URL string
//
// Returns None when the link (or the base it needs) does not parse.
// An absolute link is returned unchanged, not re-serialized, so
// normalizing the output a second time is a no-op.
pub fn normalize_link(link: &str, base: &str) -> Option<String> {
    if link.starts_with("//") {
        let base = Url::parse(base).ok()?;
        return Some(format!("{}:{}", base.scheme(), link));
    }

    match Url::parse(link) {
        // Parsed on its own, so it carries a scheme
        Ok(_) => Some(link.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(base).ok()?;
            base.join(link).ok().map(String::from)
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_link_is_unchanged() {
        let link = "https://Example.com/a/../b?q=1#frag";
        assert_eq!(normalize_link(link, "https://root.test/"), Some(link.to_string()));

        let once = normalize_link("/a/b", "https://root.test/").unwrap();
        assert_eq!(normalize_link(&once, "https://other.test/"), Some(once.clone()));
    }

    #[test]
    fn test_scheme_relative_link() {
        assert_eq!(
            normalize_link("//example.com/x", "https://root.test/"),
            Some("https://example.com/x".to_string())
        );
        assert_eq!(
            normalize_link("//example.com/x", "http://root.test/deep/page"),
            Some("http://example.com/x".to_string())
        );
    }

    #[test]
    fn test_relative_link() {
        assert_eq!(
            normalize_link("/a/b", "https://root.test/p/q"),
            Some("https://root.test/a/b".to_string())
        );
        assert_eq!(
            normalize_link("c", "https://root.test/p/q"),
            Some("https://root.test/p/c".to_string())
        );
        assert_eq!(
            normalize_link("../up?x=1#top", "https://root.test/p/q/r"),
            Some("https://root.test/p/up?x=1#top".to_string())
        );
    }

    #[test]
    fn test_unresolvable_link() {
        // Relative link with a base that isn't a URL
        assert_eq!(normalize_link("/a", "not a url"), None);
        assert_eq!(normalize_link("//example.com", "not a url"), None);
        // Absolute link with a broken host
        assert_eq!(normalize_link("http://exa mple.com/", "https://root.test/"), None);
    }
}
