// src/crawl/fetch.rs
// =============================================================================
// Downloads pages for the walker.
//
// Each request:
// - Is a plain GET with a User-Agent picked at random from the config
// - Gives up after 5 seconds (connect + headers + body)
// - Reads at most 1 MiB of body, the rest is left on the wire
//
// The status code is not looked at. A 404 page still has links in it, and
// for generating traffic any response is as good as another. Only transport
// problems (DNS, refused connection, TLS, timeout) count as failures.
//
// Rust concepts:
// - async-trait: lets a trait have async fns that work behind generics
// - Streams: the body is read chunk by chunk instead of all at once
// - thiserror: each failure kind is an enum variant with a message
// - #[from]: `?` turns a url or reqwest error into a FetchError for us
// =============================================================================

use async_trait::async_trait;
use futures::StreamExt;  // StreamExt gives us .next() on the body stream
use rand::seq::IndexedRandom;  // .choose() on a slice
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Per-request limit, independent of the session timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Bytes of body read before we stop
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Source of page bodies for the crawl engine
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// reqwest-backed fetcher used by the real binary
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    user_agents: Vec<String>,
}

impl HttpFetcher {
    pub fn new(user_agents: Vec<String>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, user_agents })
    }

    fn pick_user_agent(&self) -> Option<&str> {
        self.user_agents
            .choose(&mut rand::rng())
            .map(String::as_str)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url)?;
        let mut request = self.client.get(url);
        if let Some(agent) = self.pick_user_agent() {
            request = request.header(USER_AGENT, agent);
        }

        let response = request.send().await?;
        read_capped(response, MAX_BODY_BYTES).await
    }
}

// Reads the body chunk by chunk and stops once `cap` bytes are in hand
async fn read_capped(response: Response, cap: usize) -> Result<String, FetchError> {
    let mut body = Vec::new();
    let mut chunks = response.bytes_stream();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        let room = cap - body.len();
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
