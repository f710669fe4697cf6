// src/crawl/mod.rs
// =============================================================================
// This module performs the random walk that generates traffic.
//
// Pieces:
// - fetch: GETs a page with a random user agent, 5s timeout, 1 MiB cap
// - throttle: Random pause between hops so the traffic looks human
// - engine: Picks roots, walks links, blacklists failures, stops on timeout
//
// Everything runs on a single task. There is no parallel fetching: one
// request, one extraction, one sleep, then the next hop.
// =============================================================================

mod engine;
mod fetch;
mod throttle;

pub use engine::Crawler;
pub use fetch::HttpFetcher;
