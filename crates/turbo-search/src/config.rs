//! Service configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use turbo_catalog::search::DEFAULT_PAGE_SIZE;
use turbo_data::FetchClient;

/// Default prefix length for logged error messages.
pub const DEFAULT_LOG_MESSAGE_LIMIT: usize = 60;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_log_message_limit() -> usize {
    DEFAULT_LOG_MESSAGE_LIMIT
}

fn default_timeout_ms() -> u64 {
    5000
}

/// Invalid configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{backend}: endpoint must be an absolute http(s) URL, got {endpoint:?}")]
    InvalidEndpoint {
        backend: &'static str,
        endpoint: String,
    },

    #[error("{0} must be at least 1")]
    Zero(&'static str),
}

/// Connection settings for one backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendEndpoint {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Headers sent with every call (API keys, environment ids).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Enforced by the HTTP client, not by the engine.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl BackendEndpoint {
    /// Create an endpoint with no extra headers.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: BTreeMap::new(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Build a fetch client carrying this endpoint's headers and timeout.
    pub fn client(&self) -> FetchClient {
        self.headers
            .iter()
            .fold(FetchClient::new(), |client, (key, value)| {
                client.with_default_header(key.clone(), value.clone())
            })
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }

    fn validate(&self, backend: &'static str) -> Result<(), ConfigError> {
        let absolute =
            self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://");
        if !absolute {
            return Err(ConfigError::InvalidEndpoint {
                backend,
                endpoint: self.endpoint.clone(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Zero("timeout_ms"));
        }
        Ok(())
    }
}

/// Top-level search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Page size used when neither backend nor request supplies one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    /// Error messages are logged truncated to this many characters.
    #[serde(default = "default_log_message_limit")]
    pub log_message_limit: usize,
    /// Deterministic catalog/browse backend.
    pub catalog: BackendEndpoint,
    /// AI-ranking search backend.
    pub search: BackendEndpoint,
}

impl SearchConfig {
    /// Check the configuration for values the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Zero("default_page_size"));
        }
        if self.log_message_limit == 0 {
            return Err(ConfigError::Zero("log_message_limit"));
        }
        self.catalog.validate("catalog")?;
        self.search.validate("search")
    }

    /// Engine settings derived from this configuration.
    pub fn settings(&self) -> ServiceSettings {
        ServiceSettings {
            default_page_size: self.default_page_size,
            log_message_limit: self.log_message_limit,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            log_message_limit: default_log_message_limit(),
            catalog: BackendEndpoint::new("https://catalog.example.com/graphql"),
            search: BackendEndpoint::new("https://search.example.com/graphql"),
        }
    }
}

/// The subset of configuration the engine itself reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub default_page_size: u32,
    pub log_message_limit: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            log_message_limit: DEFAULT_LOG_MESSAGE_LIMIT,
        }
    }
}
