// src/links/extract.rs
// =============================================================================
// Finds the next hops in a page body.
//
// This is a lexical scan: we look for href="..." or href='...' anywhere in
// the text. It does not build a DOM, so it also picks up href on <link>
// and other tags, and it misses links generated by scripts. That is fine
// for generating traffic, and much cheaper than a full parse.
//
// Every match goes through normalize_link and should_accept; only URLs
// that survive both are returned, in the order they appear in the page.
//
// Rust concepts:
// - Traits: ExtractLinks is the seam the engine depends on
// - Unit structs: HrefScanner has no fields, it is only a type to hang
//   the trait impl on
// - Iterator adapters: filter_map drops what doesn't parse in one pass
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;  // (.*?) is lazy, so one match stops at the first closing quote

use super::filter::{should_accept, Blacklist};
use super::normalize::normalize_link;

static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href=["'](.*?)["']"#).expect("href pattern is valid"));

/// Something that can pull crawlable links out of a fetched page
pub trait ExtractLinks {
    /// Returns accepted absolute URLs in document order, duplicates included
    fn extract(&self, body: &str, base_url: &str, blacklist: &Blacklist) -> Vec<String>;
}

/// Regex-based `href` scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct HrefScanner;

impl ExtractLinks for HrefScanner {
    fn extract(&self, body: &str, base_url: &str, blacklist: &Blacklist) -> Vec<String> {
        HREF.captures_iter(body)
            // Group 1 is the value between the quotes
            .filter_map(|caps| caps.get(1))
            .map(|raw| raw.as_str())
            // Same-page fragments are not worth a request
            .filter(|raw| !raw.starts_with('#'))
            .filter_map(|raw| normalize_link(raw, base_url))
            .filter(|url| should_accept(url, blacklist))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(body: &str, base: &str) -> Vec<String> {
        HrefScanner.extract(body, base, &Blacklist::default())
    }

    #[test]
    fn test_skip_fragment_links() {
        let html = r##"<a href="#top">x</a><a href="/ok">y</a>"##;
        assert_eq!(scan(html, "https://root.test/"), vec!["https://root.test/ok"]);
    }

    #[test]
    fn test_both_quote_styles() {
        let html = r#"<a href='/single'>a</a> <a href="/double">b</a>"#;
        assert_eq!(
            scan(html, "https://root.test/"),
            vec!["https://root.test/single", "https://root.test/double"]
        );
    }

    #[test]
    fn test_document_order_and_duplicates() {
        let html = r#"
            <link rel="stylesheet" href="//cdn.example.com/site.css">
            <a href="https://other.test/b">b</a>
            <a href="/a">a</a>
            <a href="/a">a again</a>
        "#;
        assert_eq!(
            scan(html, "https://root.test/index.html"),
            vec![
                "https://cdn.example.com/site.css",
                "https://other.test/b",
                "https://root.test/a",
                "https://root.test/a",
            ]
        );
    }

    #[test]
    fn test_rejected_links_are_dropped() {
        let html = r#"
            <a href="mailto:me@x.test">mail</a>
            <a href="ftp://files.x.test/">ftp</a>
            <a HREF="/uppercase-attribute">ignored</a>
            <a href="/blocked/page">blocked</a>
            <a href="/kept">kept</a>
        "#;
        let blacklist = Blacklist::from(vec!["/blocked".to_string()]);
        let links = HrefScanner.extract(html, "https://root.test/", &blacklist);
        assert_eq!(links, vec!["https://root.test/kept"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(scan("", "https://root.test/").is_empty());
        assert!(scan("<p>no links here</p>", "https://root.test/").is_empty());
    }
}
