//! End-to-end tests of both capabilities over in-memory backends.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use turbo_data::FetchError;
use turbo_search::backend::{
    CatalogBackend, CatalogQuery, CatalogResponse, SearchBackend, SearchQuery, SearchResponse,
};
use turbo_search::prelude::*;

/// Records every query and answers with a canned response, or fails.
#[derive(Clone, Default)]
struct StubCatalog {
    response: Option<Value>,
    queries: Arc<Mutex<Vec<CatalogQuery>>>,
}

#[derive(Clone, Default)]
struct StubSearch {
    response: Option<Value>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

fn unavailable() -> BackendError {
    BackendError::Transport(FetchError::HttpError {
        status: 503,
        message: "upstream connect error or disconnect/reset before headers".to_string(),
    })
}

#[async_trait]
impl CatalogBackend for StubCatalog {
    async fn product_search(&self, query: &CatalogQuery) -> Result<CatalogResponse, BackendError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.response {
            Some(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
            None => Err(unavailable()),
        }
    }
}

#[async_trait]
impl SearchBackend for StubSearch {
    async fn product_search(&self, query: &SearchQuery) -> Result<SearchResponse, BackendError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.response {
            Some(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
            None => Err(unavailable()),
        }
    }
}

fn product(sku: &str, regular: f64, final_price: f64) -> Value {
    json!({
        "productView": {
            "__typename": "SimpleProductView",
            "id": sku,
            "name": format!("Product {sku}"),
            "sku": sku,
            "urlKey": sku.to_lowercase(),
            "inStock": true,
            "images": [{ "url": format!("https://cdn.example.com/{sku}.jpg"), "roles": ["image"] }],
            "price": {
                "regular": { "amount": { "value": regular, "currency": "USD" } },
                "final": { "amount": { "value": final_price, "currency": "USD" } }
            }
        }
    })
}

fn catalog_body(items: Vec<Value>, total_count: u32) -> Value {
    json!({
        "items": items,
        "total_count": total_count,
        "page_info": { "current_page": 1, "page_size": 24, "total_pages": 1 },
        "facets": [{
            "attribute": "manufacturer",
            "title": "Brand",
            "type": "SCALAR",
            "buckets": [{ "title": "Acme", "count": 3 }]
        }]
    })
}

fn ranking_body(skus: &[&str], total_count: u32, current_page: u32, total_pages: u32) -> Value {
    json!({
        "items": skus.iter().map(|s| json!({ "product": { "sku": s }, "productView": { "sku": s } })).collect::<Vec<_>>(),
        "total_count": total_count,
        "page_info": { "current_page": current_page, "page_size": 3, "total_pages": total_pages },
        "facets": [
            { "attribute": "color", "title": "Color", "type": "SCALAR",
              "buckets": [{ "title": "Red", "count": 2 }, { "title": "Blue" }] },
            { "attribute": "price", "title": "Price", "type": "RANGE",
              "buckets": [{ "title": "0-50", "count": 5 }] }
        ]
    })
}

fn service(
    catalog: &StubCatalog,
    search: &StubSearch,
) -> ProductSearchService<StubCatalog, StubSearch> {
    ProductSearchService::new(catalog.clone(), search.clone())
}

fn skus(items: &[ProductCard]) -> Vec<&str> {
    items.iter().map(|c| c.sku.as_str()).collect()
}

#[tokio::test]
async fn test_browse_uses_catalog_only() {
    let catalog = StubCatalog {
        response: Some(catalog_body(vec![product("A", 10.0, 10.0), product("B", 20.0, 20.0)], 2)),
        ..StubCatalog::default()
    };
    let search = StubSearch::default();

    let request = SearchRequest::new().with_phrase("   ");
    let cards = service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(skus(&cards.items), vec!["A", "B"]);
    assert_eq!(cards.total_count, 2);
    assert!(search.queries.lock().unwrap().is_empty());

    let queries = catalog.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].phrase, "");
}

#[tokio::test]
async fn test_search_preserves_ai_ranking() {
    let catalog = StubCatalog {
        response: Some(catalog_body(
            vec![product("A", 10.0, 10.0), product("B", 10.0, 10.0), product("C", 10.0, 10.0)],
            3,
        )),
        ..StubCatalog::default()
    };
    let search = StubSearch {
        response: Some(ranking_body(&["C", "GONE", "A", "B"], 9, 1, 3)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new().with_phrase("shirt");
    let cards = service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(skus(&cards.items), vec!["C", "A", "B"]);
    assert_eq!(cards.total_count, 9);
    assert_eq!(cards.current_page, 1);
    assert_eq!(cards.page_info.total_pages, 3);
    assert_eq!(cards.page_info.page_size, 3);
    assert!(cards.has_more_items);

    assert_eq!(search.queries.lock().unwrap()[0].phrase, "shirt");
    assert_eq!(catalog.queries.lock().unwrap()[0].phrase, "shirt");
}

#[tokio::test]
async fn test_last_page_has_no_more_items() {
    let catalog = StubCatalog {
        response: Some(catalog_body(vec![product("A", 10.0, 10.0)], 1)),
        ..StubCatalog::default()
    };
    let search = StubSearch {
        response: Some(ranking_body(&["A"], 4, 2, 2)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new().with_phrase("a").with_pagination(2, 3);
    let cards = service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(cards.current_page, 2);
    assert!(!cards.has_more_items);
}

#[tokio::test]
async fn test_on_sale_only_recomputes_total() {
    let catalog = StubCatalog {
        response: Some(catalog_body(
            vec![
                product("A", 100.0, 80.0),
                product("B", 100.0, 100.0),
                product("C", 50.0, 25.0),
                product("D", 30.0, 20.0),
            ],
            50,
        )),
        ..StubCatalog::default()
    };
    let search = StubSearch::default();

    let request = SearchRequest::new().on_sale_only();
    let cards = service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(skus(&cards.items), vec!["A", "C", "D"]);
    assert_eq!(cards.total_count, 3);
    assert!(cards.items.iter().all(|c| c.discount_percent > 0));

    let forwarded = &catalog.queries.lock().unwrap()[0].filter;
    assert!(forwarded.iter().all(|clause| clause.attribute != "onSaleOnly"));
}

#[tokio::test]
async fn test_on_sale_only_in_search_mode_keeps_ranking() {
    let catalog = StubCatalog {
        response: Some(catalog_body(
            vec![
                product("A", 40.0, 30.0),
                product("B", 40.0, 40.0),
                product("C", 60.0, 45.0),
            ],
            3,
        )),
        ..StubCatalog::default()
    };
    let search = StubSearch {
        response: Some(ranking_body(&["C", "B", "A"], 50, 1, 17)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new().with_phrase("jacket").on_sale_only();
    let cards = service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(skus(&cards.items), vec!["C", "A"]);
    assert_eq!(cards.total_count, 2);
    assert_eq!(cards.page_info.total_pages, 17);

    let response = service(&catalog, &search).product_search(&request).await;
    assert_eq!(skus(&response.products.items), vec!["C", "A"]);
    assert_eq!(response.products.total_count, 2);
}

#[tokio::test]
async fn test_relevance_sort_is_dropped_for_catalog() {
    let catalog = StubCatalog {
        response: Some(catalog_body(vec![product("A", 10.0, 10.0)], 1)),
        ..StubCatalog::default()
    };
    let search = StubSearch {
        response: Some(ranking_body(&["A"], 1, 1, 1)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new()
        .with_phrase("a")
        .with_sort(SearchSort::new(SortAttribute::Relevance, SortDirection::Desc));
    service(&catalog, &search).product_cards(&request).await.unwrap();

    assert_eq!(catalog.queries.lock().unwrap()[0].sort, None);
    let search_sort = &search.queries.lock().unwrap()[0].sort;
    assert_eq!(search_sort.len(), 1);
    assert_eq!(search_sort[0].attribute, "relevance");
}

#[tokio::test]
async fn test_product_search_includes_facets() {
    let catalog = StubCatalog {
        response: Some(catalog_body(vec![product("A", 10.0, 10.0), product("B", 10.0, 10.0)], 2)),
        ..StubCatalog::default()
    };
    let search = StubSearch {
        response: Some(ranking_body(&["B", "A"], 2, 1, 1)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new().with_phrase("x");
    let response = service(&catalog, &search).product_search(&request).await;

    assert_eq!(skus(&response.products.items), vec!["B", "A"]);
    assert_eq!(response.total_count, 2);
    assert_eq!(response.facets.total_count, 2);

    let facets = &response.facets.facets;
    assert_eq!(facets.len(), 2);
    assert_eq!(facets[0].key, "color");
    assert_eq!(facets[0].facet_type, FacetType::Checkbox);
    assert_eq!(facets[0].options[1].count, 0);
    assert_eq!(facets[1].facet_type, FacetType::Radio);
}

#[tokio::test]
async fn test_browse_facets_come_from_catalog() {
    let catalog = StubCatalog {
        response: Some(catalog_body(vec![product("A", 10.0, 10.0)], 1)),
        ..StubCatalog::default()
    };
    let search = StubSearch::default();

    let response = service(&catalog, &search)
        .product_search(&SearchRequest::new())
        .await;

    assert_eq!(response.facets.facets.len(), 1);
    assert_eq!(response.facets.facets[0].key, "brand");
    assert_eq!(response.facets.facets[0].title, "Brand");
}

#[tokio::test]
async fn test_product_search_never_raises() {
    let catalog = StubCatalog::default();
    let search = StubSearch::default();

    let request = SearchRequest {
        phrase: Some("boots".to_string()),
        limit: Some(12),
        ..SearchRequest::default()
    };
    let response = service(&catalog, &search).product_search(&request).await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
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

    let response = service(&catalog, &search)
        .product_search(&SearchRequest::new())
        .await;
    assert_eq!(response.products.page_info.page_size, 24);
}

#[tokio::test]
async fn test_product_cards_reraises() {
    let catalog = StubCatalog::default();
    let search = StubSearch::default();

    let err = service(&catalog, &search)
        .product_cards(&SearchRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.backend(), "catalog");
}

#[tokio::test]
async fn test_dual_failure_when_only_catalog_fails() {
    let catalog = StubCatalog::default();
    let search = StubSearch {
        response: Some(ranking_body(&["A"], 1, 1, 1)),
        ..StubSearch::default()
    };

    let request = SearchRequest::new().with_phrase("a");
    let err = service(&catalog, &search)
        .product_cards(&request)
        .await
        .unwrap_err();
    assert_eq!(err.backend(), "catalog");
    assert_eq!(search.queries.lock().unwrap().len(), 1);

    let response = service(&catalog, &search).product_search(&request).await;
    assert!(response.products.items.is_empty());
}

#[tokio::test]
async fn test_default_page_size_without_backend_paging() {
    let catalog = StubCatalog {
        response: Some(json!({ "items": [product("A", 10.0, 10.0)] })),
        ..StubCatalog::default()
    };
    let search = StubSearch::default();

    let cards = service(&catalog, &search)
        .product_cards(&SearchRequest::new())
        .await
        .unwrap();

    assert_eq!(catalog.queries.lock().unwrap()[0].page_size, 24);
    assert_eq!(cards.page_info.page_size, 24);
    assert_eq!(cards.page_info.total_pages, 1);
    assert_eq!(cards.total_count, 1);
    assert!(!cards.has_more_items);
}

#[tokio::test]
async fn test_custom_settings_apply() {
    let catalog = StubCatalog {
        response: Some(json!({ "items": [] })),
        ..StubCatalog::default()
    };
    let search = StubSearch::default();
    let settings = ServiceSettings {
        default_page_size: 48,
        log_message_limit: 10,
    };

    let cards = service(&catalog, &search)
        .with_settings(settings)
        .product_cards(&SearchRequest::new())
        .await
        .unwrap();
    assert_eq!(cards.page_info.page_size, 48);
}
