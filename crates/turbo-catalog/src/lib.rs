//! Storefront product-search domain types for TurboCommerce.
//!
//! This crate holds the request-scoped vocabulary shared by the search engine
//! and its callers:
//!
//! - **Search**: unified filter/sort request, facets, page info
//! - **Product**: the catalog detail record (`ProductView`) and the UI-ready
//!   `ProductCard` derived from it
//! - **Money**: cents-based prices with display formatting and discount math
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_catalog::prelude::*;
//!
//! let request: SearchRequest = serde_json::from_str(r#"{
//!     "phrase": "jacket",
//!     "filter": { "color": { "in": ["red"] }, "onSaleOnly": true },
//!     "sort": { "attribute": "PRICE", "direction": "ASC" },
//!     "page": 1,
//!     "limit": 12
//! }"#)?;
//!
//! let card = ProductCard::try_from_view(&view)?;
//! println!("{} {}", card.name, card.price.final_display);
//! ```

pub mod de;
pub mod error;
pub mod money;

pub mod product;
pub mod search;

pub use error::TransformError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::TransformError;
    pub use crate::money::{Currency, Money};

    // Product
    pub use crate::product::{
        CardImage, CardOptionGroup, CardOptionValue, CardPrice, PriceKind, ProductCard,
        ProductView,
    };

    // Search
    pub use crate::search::{
        Facet, FacetOption, FacetType, FilterConstraint, PageInfo, RangeBounds, SearchFilter,
        SearchRequest, SearchSort, SortAttribute, SortDirection,
    };
}
