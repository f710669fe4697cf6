// src/crawl/engine.rs
// =============================================================================
// The random walk.
//
// How it works:
// 1. Pick a root URL at random and fetch it
//    - fetch failed or page had no usable links: pick another root
// 2. The links found become the "pool". Walk from depth 0:
//    - stop the branch when depth reaches max_depth or the pool is empty
//    - pick a random link from the pool and fetch it
//    - failed: blacklist it, drop it from the pool, try again at the
//      SAME depth
//    - succeeded with more than one new link: the new links replace the pool
//    - succeeded with 0 or 1 link: blacklist and drop it, keep the pool
//    - sleep a random number of seconds, go one level deeper
// 3. Back to 1, forever, unless the session timeout has passed
//
// The timeout clock starts once, when crawl() is called, and is never
// reset between roots. It is checked before each root and before each hop;
// a fetch already in flight is allowed to finish.
//
// The walk is an explicit loop over (pool, depth). Every failed hop
// removes one link from the pool, so a branch of dead links always ends.
//
// Rust concepts:
// - Generics with a default: Crawler<F, E = HrefScanner> lets tests plug
//   in a fake fetcher while the binary just writes Crawler<HttpFetcher>
// - let-else: bail out of the loop when there is no root to pick
// - &mut self across .await: the crawler owns all its state, no locks
// =============================================================================

use rand::rngs::StdRng;  // one seedable generator for every random choice
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::time::{sleep, Instant};  // tokio's clock, so paused-time tests work
use tracing::{debug, info, warn};

use super::fetch::Fetch;
use super::throttle::Throttle;
use crate::config::Config;
use crate::links::{Blacklist, ExtractLinks, HrefScanner};

/// Counters reported when the crawl ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Root URLs attempted
    pub roots: u64,
    /// Root fetches that failed
    pub root_failures: u64,
    /// Successful hops
    pub hops: u64,
    /// Hop fetches that failed
    pub failed_hops: u64,
    /// URLs added to the blacklist during the run
    pub blacklisted: u64,
}

// Why a branch of the walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BranchEnd {
    MaxDepth,
    Exhausted,
    TimedOut,
}

pub struct Crawler<F, E = HrefScanner> {
    fetcher: F,
    extractor: E,
    blacklist: Blacklist,
    root_urls: Vec<String>,
    max_depth: usize,
    timeout: Option<Duration>,
    throttle: Throttle,
    rng: StdRng,
    started: Instant,
    links: Vec<String>,
    stats: CrawlStats,
}

impl<F: Fetch> Crawler<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self::with_extractor(config, fetcher, HrefScanner)
    }
}

impl<F: Fetch, E: ExtractLinks> Crawler<F, E> {
    /// Builds a crawler that takes ownership of the configured blacklist
    pub fn with_extractor(config: Config, fetcher: F, extractor: E) -> Self {
        let timeout = config.timeout();
        let blacklist = Blacklist::from(config.blacklisted_urls);
        if !blacklist.is_empty() {
            debug!(entries = blacklist.len(), "Loaded blacklist");
        }

        Self {
            fetcher,
            extractor,
            blacklist,
            root_urls: config.root_urls,
            max_depth: config.max_depth,
            timeout,
            throttle: Throttle::new(config.min_sleep, config.max_sleep),
            rng: StdRng::from_os_rng(),
            started: Instant::now(),
            links: Vec::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Runs until the session timeout passes. With no timeout, never returns.
    pub async fn crawl(&mut self) -> CrawlStats {
        self.started = Instant::now();

        loop {
            if self.timed_out() {
                info!("Timeout has been reached, exiting");
                break;
            }

            let Some(root) = self.root_urls.choose(&mut self.rng).cloned() else {
                warn!("No root URLs configured, nothing to crawl");
                break;
            };

            match self.visit_root(&root).await {
                Some(BranchEnd::TimedOut) => {
                    info!("Timeout has been reached, exiting");
                    break;
                }
                Some(BranchEnd::MaxDepth) => {
                    info!("Maximum depth reached, moving to next root URL");
                }
                Some(BranchEnd::Exhausted) => {
                    info!("No links to browse, moving to next root URL");
                }
                None => {}
            }
        }

        info!(
            roots = self.stats.roots,
            root_failures = self.stats.root_failures,
            hops = self.stats.hops,
            failed_hops = self.stats.failed_hops,
            blacklisted = self.stats.blacklisted,
            "Crawl finished"
        );
        self.stats
    }

    // Fetches a root and walks from it. None means the root gave us nothing
    // to walk. Roots are never blacklisted.
    async fn visit_root(&mut self, root: &str) -> Option<BranchEnd> {
        info!(url = root, "Starting with root URL");
        self.stats.roots += 1;

        let body = match self.fetcher.fetch(root).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = root, error = %e, "Error connecting to root URL");
                self.stats.root_failures += 1;
                return None;
            }
        };

        self.links = self.extractor.extract(&body, root, &self.blacklist);
        info!(url = root, count = self.links.len(), "Found links");

        if self.links.is_empty() {
            return None;
        }
        Some(self.browse().await)
    }

    async fn browse(&mut self) -> BranchEnd {
        let mut depth = 0;

        loop {
            if depth >= self.max_depth {
                return BranchEnd::MaxDepth;
            }
            if self.links.is_empty() {
                return BranchEnd::Exhausted;
            }
            if self.timed_out() {
                return BranchEnd::TimedOut;
            }

            let index = self.rng.random_range(0..self.links.len());
            let link = self.links[index].clone();
            info!(url = %link, depth, "Visiting");

            let body = match self.fetcher.fetch(&link).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(url = %link, error = %e, "Error visiting link");
                    self.stats.failed_hops += 1;
                    self.discard(index);
                    continue;
                }
            };
            self.stats.hops += 1;

            let found = self.extractor.extract(&body, &link, &self.blacklist);
            info!(url = %link, count = found.len(), "Found links");

            if found.len() > 1 {
                self.links = found;
            } else {
                self.discard(index);
            }

            let pause = self.throttle.pick(&mut self.rng);
            debug!(seconds = pause.as_secs(), "Sleeping");
            sleep(pause).await;

            depth += 1;
        }
    }

    // Blacklists the pool entry at `index` and removes it from the pool
    fn discard(&mut self, index: usize) {
        let link = self.links.remove(index);
        debug!(url = %link, "Blacklisting");
        self.blacklist.insert(link);
        self.stats.blacklisted += 1;
    }

    fn timed_out(&self) -> bool {
        self.timeout
            .is_some_and(|limit| self.started.elapsed() > limit)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the RNG a field instead of rand::rng() everywhere?
//    - Every random decision in the walk draws from it
//    - Tests replace it with StdRng::seed_from_u64 and get the same walk
//      every run
//
// 2. Why tokio::time::Instant and not std::time::Instant?
//    - #[tokio::test(start_paused = true)] freezes tokio's clock and skips
//      ahead on sleep, so a 30-second walk finishes instantly
//    - std's clock would keep real time and the timeout would never fire
//
// 3. Why clone the link before fetching?
//    - self.links[index] borrows self.links
//    - discard() needs &mut self, which can't happen while that borrow
//      is alive, so we keep our own copy
// -----------------------------------------------------------------------------
