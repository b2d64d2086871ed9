//! Backend collaborators.
//!
//! The engine talks to both backends through these traits; `graphql`
//! provides the HTTP implementations.

mod graphql;
mod types;

pub use graphql::{GraphQlCatalogBackend, GraphQlSearchBackend};
pub use types::*;

use async_trait::async_trait;

use crate::error::BackendError;

/// The deterministic catalog/browse backend.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Run one product query requesting full detail.
    async fn product_search(&self, query: &CatalogQuery) -> Result<CatalogResponse, BackendError>;
}

/// The AI-ranking search backend.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one ranked query requesting product identity only.
    async fn product_search(&self, query: &SearchQuery) -> Result<SearchResponse, BackendError>;
}
