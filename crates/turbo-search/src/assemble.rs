//! Response envelopes and pagination derivation.

use serde::{Deserialize, Serialize};
use turbo_catalog::product::ProductCard;
use turbo_catalog::search::{Facet, PageInfo, SearchRequest};

use crate::backend::BackendPageInfo;
use crate::collab::FacetKeyMapper;
use crate::config::ServiceSettings;
use crate::executor::QueryOutcome;
use crate::facets::transform_facets;

/// A paginated card list. This is the whole cards capability response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductList {
    pub items: Vec<ProductCard>,
    pub total_count: u32,
    pub has_more_items: bool,
    pub current_page: u32,
    #[serde(rename = "page_info")]
    pub page_info: PageInfo,
}

/// The cards capability response.
pub type CardsResponse = ProductList;

/// Facets for the search+filter capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetList {
    pub facets: Vec<Facet>,
    /// Always the products' total.
    pub total_count: u32,
}

/// The search+filter capability response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResponse {
    pub products: ProductList,
    pub facets: FacetList,
    pub total_count: u32,
}

/// Effective paging: backend value, then request, then defaults.
///
/// A zero current page or page size from the backend counts as missing.
pub fn derive_page_info(
    backend: Option<&BackendPageInfo>,
    request: &SearchRequest,
    settings: &ServiceSettings,
) -> PageInfo {
    let reported = backend.copied().unwrap_or_default();
    PageInfo {
        current_page: reported
            .current_page
            .filter(|p| *p >= 1)
            .or_else(|| request.requested_page())
            .unwrap_or(1),
        page_size: reported
            .page_size
            .filter(|s| *s >= 1)
            .or_else(|| request.requested_limit())
            .unwrap_or(settings.default_page_size),
        total_pages: reported.total_pages.unwrap_or(1),
    }
}

impl ProductList {
    /// Build the list envelope around `items`.
    pub fn new(items: Vec<ProductCard>, total_count: u32, page_info: PageInfo) -> Self {
        Self {
            items,
            total_count,
            has_more_items: page_info.has_more_items(),
            current_page: page_info.current_page,
            page_info,
        }
    }

    /// Zero items on page 1 of 0.
    pub fn empty(request: &SearchRequest, settings: &ServiceSettings) -> Self {
        let page_size = request
            .requested_limit()
            .unwrap_or(settings.default_page_size);
        Self::new(Vec::new(), 0, PageInfo::new(1, page_size, 0))
    }
}

impl ProductSearchResponse {
    /// The deterministic envelope returned in place of a failure.
    pub fn empty(request: &SearchRequest, settings: &ServiceSettings) -> Self {
        Self {
            products: ProductList::empty(request, settings),
            facets: FacetList {
                facets: Vec::new(),
                total_count: 0,
            },
            total_count: 0,
        }
    }
}

/// Cards capability: pagination and derived fields, no facets.
pub fn assemble_cards(
    outcome: QueryOutcome,
    request: &SearchRequest,
    settings: &ServiceSettings,
) -> CardsResponse {
    let page_info = derive_page_info(outcome.page_info.as_ref(), request, settings);
    ProductList::new(outcome.items, outcome.total_count, page_info)
}

/// Search+filter capability: products plus transformed facets.
pub fn assemble_search(
    outcome: QueryOutcome,
    request: &SearchRequest,
    settings: &ServiceSettings,
    keys: &dyn FacetKeyMapper,
) -> ProductSearchResponse {
    let facets = transform_facets(&outcome.facets, keys);
    let total_count = outcome.total_count;
    ProductSearchResponse {
        products: assemble_cards(outcome, request, settings),
        facets: FacetList {
            facets,
            total_count,
        },
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{RawBucket, RawFacet};
    use crate::collab::DefaultFacetKeys;

    fn reported(current: u32, size: u32, total: u32) -> BackendPageInfo {
        BackendPageInfo {
            current_page: Some(current),
            page_size: Some(size),
            total_pages: Some(total),
        }
    }

    #[test]
    fn test_backend_page_info_wins() {
        let request = SearchRequest::new().with_pagination(5, 10);
        let info = derive_page_info(
            Some(&reported(2, 12, 4)),
            &request,
            &ServiceSettings::default(),
        );
        assert_eq!(info, PageInfo::new(2, 12, 4));
    }

    #[test]
    fn test_request_then_defaults() {
        let settings = ServiceSettings::default();

        let request = SearchRequest::new().with_pagination(3, 10);
        assert_eq!(
            derive_page_info(None, &request, &settings),
            PageInfo::new(3, 10, 1)
        );

        let info = derive_page_info(None, &SearchRequest::new(), &settings);
        assert_eq!(info, PageInfo::new(1, 24, 1));

        let partial = BackendPageInfo {
            current_page: Some(0),
            page_size: None,
            total_pages: Some(0),
        };
        let info = derive_page_info(Some(&partial), &SearchRequest::new(), &settings);
        assert_eq!(info, PageInfo::new(1, 24, 0));
    }

    #[test]
    fn test_has_more_items_is_strict() {
        let settings = ServiceSettings::default();
        let request = SearchRequest::new();

        let list = assemble_cards(
            QueryOutcome {
                page_info: Some(reported(2, 24, 2)),
                ..QueryOutcome::default()
            },
            &request,
            &settings,
        );
        assert!(!list.has_more_items);
        assert_eq!(list.current_page, 2);

        let list = assemble_cards(
            QueryOutcome {
                page_info: Some(reported(1, 24, 3)),
                ..QueryOutcome::default()
            },
            &request,
            &settings,
        );
        assert!(list.has_more_items);
    }

    #[test]
    fn test_search_envelope_shares_total() {
        let outcome = QueryOutcome {
            total_count: 7,
            facets: vec![RawFacet {
                attribute: "color".to_string(),
                title: Some("Color".to_string()),
                kind: Some("SCALAR".to_string()),
                buckets: vec![RawBucket {
                    title: "Red".to_string(),
                    count: Some(7),
                }],
            }],
            ..QueryOutcome::default()
        };

        let response = assemble_search(
            outcome,
            &SearchRequest::new(),
            &ServiceSettings::default(),
            &DefaultFacetKeys,
        );
        assert_eq!(response.total_count, 7);
        assert_eq!(response.products.total_count, 7);
        assert_eq!(response.facets.total_count, 7);
        assert_eq!(response.facets.facets[0].key, "color");
    }

    #[test]
    fn test_empty_envelope() {
        let request = SearchRequest {
            limit: Some(12),
            ..SearchRequest::default()
        };
        let response = ProductSearchResponse::empty(&request, &ServiceSettings::default());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "products": {
                    "items": [],
                    "totalCount": 0,
                    "hasMoreItems": false,
                    "currentPage": 1,
                    "page_info": { "current_page": 1, "page_size": 12, "total_pages": 0 }
                },
                "facets": { "facets": [], "totalCount": 0 },
                "totalCount": 0
            })
        );
    }
}
