// src/links/mod.rs
// =============================================================================
// This module turns raw page bodies into lists of crawlable URLs.
//
// Submodules:
// - normalize: Resolves relative / scheme-relative links against a base URL
// - filter: Decides if a URL looks like http(s) and is not blacklisted
// - extract: Scans a body for href="..." values and runs them through both
//
// The traversal engine only talks to the ExtractLinks trait, so the
// lexical scanner could be replaced by a real HTML parser later.
// =============================================================================

mod extract;
mod filter;
mod normalize;

pub use extract::{ExtractLinks, HrefScanner};
pub use filter::Blacklist;
