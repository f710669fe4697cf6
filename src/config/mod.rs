// src/config/mod.rs
// =============================================================================
// Loads and validates the crawl configuration.
//
// The configuration is a JSON document:
//
//   {
//     "max_depth": 25,
//     "min_sleep": 3,
//     "max_sleep": 6,
//     "timeout": 0,
//     "root_urls": ["https://www.wikipedia.org"],
//     "blacklisted_urls": [".css", "login"],
//     "user_agents": ["Mozilla/5.0 ..."]
//   }
//
// It comes either from a file given with --config or from the copy of
// default_config.json compiled into the binary.
//
// The file is first read into RawConfig (loose types, exactly what serde
// sees), then checked and converted into Config. Everything downstream can
// rely on Config being sane: depth > 0, min_sleep <= max_sleep, at least
// one root URL and one user agent.
// =============================================================================

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// Validated crawl settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hops per branch before starting over from a new root
    pub max_depth: usize,
    /// Lower bound of the pause after each hop, in seconds
    pub min_sleep: u64,
    /// Upper bound of the pause after each hop, in seconds
    pub max_sleep: u64,
    /// Run time in seconds, 0 means run forever
    pub timeout: u64,
    pub root_urls: Vec<String>,
    pub blacklisted_urls: Vec<String>,
    pub user_agents: Vec<String>,
}

// What the JSON file actually contains, before validation
#[derive(Debug, Deserialize)]
struct RawConfig {
    max_depth: i64,
    min_sleep: i64,
    max_sleep: i64,
    #[serde(default)]
    timeout: RawTimeout,
    root_urls: Vec<String>,
    #[serde(default)]
    blacklisted_urls: Vec<String>,
    user_agents: Vec<String>,
}

// Older configs write `"timeout": false` to mean "no timeout"
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTimeout {
    Seconds(i64),
    Flag(bool),
}

impl Default for RawTimeout {
    fn default() -> Self {
        RawTimeout::Seconds(0)
    }
}

impl Config {
    /// Loads `path` if given, otherwise the embedded default configuration
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// The default configuration shipped inside the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        validate(raw)
    }

    /// Applies a --timeout value from the command line; 0 or less keeps
    /// the file's value
    pub fn override_timeout(&mut self, seconds: i64) {
        if seconds > 0 {
            self.timeout = seconds as u64;
        }
    }

    /// The run time limit, None when unbounded
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

// Checks the raw values and converts them into a Config
fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
    if raw.max_depth <= 0 {
        return Err(invalid(format!("max_depth must be positive, got {}", raw.max_depth)));
    }
    if raw.min_sleep < 0 || raw.max_sleep < 0 {
        return Err(invalid(format!(
            "sleep bounds must not be negative, got {}..{}",
            raw.min_sleep, raw.max_sleep
        )));
    }
    if raw.min_sleep > raw.max_sleep {
        return Err(invalid(format!(
            "min_sleep ({}) is greater than max_sleep ({})",
            raw.min_sleep, raw.max_sleep
        )));
    }
    if raw.root_urls.is_empty() {
        return Err(invalid("root_urls must contain at least one URL".to_string()));
    }
    if raw.user_agents.is_empty() {
        return Err(invalid("user_agents must contain at least one entry".to_string()));
    }

    let timeout = match raw.timeout {
        RawTimeout::Seconds(seconds) => seconds.max(0) as u64,
        RawTimeout::Flag(false) => 0,
        RawTimeout::Flag(true) => {
            return Err(invalid(
                "timeout must be a number of seconds or false".to_string(),
            ))
        }
    };

    Ok(Config {
        max_depth: raw.max_depth as usize,
        min_sleep: raw.min_sleep as u64,
        max_sleep: raw.max_sleep as u64,
        timeout,
        root_urls: raw.root_urls,
        blacklisted_urls: raw.blacklisted_urls,
        user_agents: raw.user_agents,
    })
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}
