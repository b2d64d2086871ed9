//! HTTP and GraphQL client utilities for TurboCommerce backends.
//!
//! Provides a small async client with a base URL, default headers and a
//! per-request timeout, plus GraphQL envelope handling.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::FetchClient;
//!
//! let client = FetchClient::new()
//!     .with_base_url("https://catalog.example.com")
//!     .with_default_header("x-api-key", key);
//!
//! let data: ProductSearchData = client
//!     .graphql("/graphql", PRODUCT_SEARCH_QUERY, &variables)
//!     .await?;
//! ```

mod error;
mod graphql;
mod request;
mod response;

pub use error::FetchError;
pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use request::RequestBuilder;
pub use response::Response;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client for backend calls.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with a base URL that will be prepended to relative request URLs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply a timeout to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        ClientRequestBuilder {
            client: self.inner.clone(),
            builder,
        }
    }

    /// POST a GraphQL operation and decode its `data`.
    pub async fn graphql<V, T>(
        &self,
        url: impl Into<String>,
        query: &str,
        variables: &V,
    ) -> Result<T, FetchError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };
        let response = self
            .post(url)
            .header("Accept", "application/json")
            .json(&request)?
            .send()
            .await?
            .error_for_status()?;

        response.json::<GraphQlResponse<T>>()?.into_result()
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    client: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and read the whole response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let url = self.builder.checked_url()?;
        let mut request = self.client.post(url);

        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = self.builder.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = self.builder.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        Response::read(response).await
    }
}
