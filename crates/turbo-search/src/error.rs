//! Search engine error types.

use thiserror::Error;
use turbo_data::FetchError;

/// A failed call to one backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Network failure, non-2xx status, or GraphQL `errors`.
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The response decoded but the expected payload was absent.
    #[error("Response is missing {0}")]
    MissingPayload(&'static str),
}

/// Errors that can fail a product-search capability.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The catalog backend call failed.
    #[error("Catalog backend failed: {0}")]
    Catalog(#[source] BackendError),

    /// The AI-search backend call failed.
    #[error("Search backend failed: {0}")]
    Search(#[source] BackendError),
}

impl SearchError {
    /// Name of the backend that failed.
    pub fn backend(&self) -> &'static str {
        match self {
            SearchError::Catalog(_) => "catalog",
            SearchError::Search(_) => "search",
        }
    }
}
