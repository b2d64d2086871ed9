//! Search module.
//!
//! Contains the backend-agnostic request vocabulary, facets, and page info.

mod facet;
mod page;
mod request;

pub use facet::{Facet, FacetOption, FacetType};
pub use page::{PageInfo, DEFAULT_PAGE_SIZE};
pub use request::{
    FilterConstraint, RangeBounds, SearchFilter, SearchRequest, SearchSort, SortAttribute,
    SortDirection,
};
