//! Dual-backend product search orchestration for TurboCommerce storefronts.
//!
//! A request with a phrase is ranked by the AI-search backend and
//! detailed by the catalog backend; a request without one browses the
//! catalog alone. Either way the result is one ordered, paginated list of
//! product cards, optionally with filter facets.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_search::prelude::*;
//!
//! let service = ProductSearchService::from_config(&config);
//!
//! let request = SearchRequest::new()
//!     .with_phrase("rain jacket")
//!     .with_pagination(1, 12);
//!
//! // Fails if a backend fails.
//! let cards = service.product_cards(&request).await?;
//!
//! // Never fails.
//! let listing = service.product_search(&request).await;
//! println!("{} results, {} facets", listing.total_count, listing.facets.facets.len());
//! ```

pub mod assemble;
pub mod backend;
pub mod collab;
pub mod config;
pub mod containment;
pub mod error;
pub mod executor;
pub mod facets;
pub mod filter;
pub mod merge;
pub mod mode;
pub mod service;
pub mod translate;

pub use assemble::{CardsResponse, FacetList, ProductList, ProductSearchResponse};
pub use config::{BackendEndpoint, ConfigError, SearchConfig, ServiceSettings};
pub use error::{BackendError, SearchError};
pub use mode::{select_mode, SearchMode};
pub use service::ProductSearchService;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assemble::{CardsResponse, FacetList, ProductList, ProductSearchResponse};
    pub use crate::backend::{CatalogBackend, SearchBackend};
    pub use crate::collab::{CardTransformer, Collaborators, FacetKeyMapper};
    pub use crate::config::{SearchConfig, ServiceSettings};
    pub use crate::containment::FailurePolicy;
    pub use crate::error::{BackendError, SearchError};
    pub use crate::filter::FilterBuilder;
    pub use crate::service::ProductSearchService;

    pub use turbo_catalog::prelude::*;
}
