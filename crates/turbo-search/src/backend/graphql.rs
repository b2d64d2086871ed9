//! GraphQL implementations of the backend traits.

use async_trait::async_trait;
use serde::Deserialize;
use turbo_data::FetchClient;

use super::{
    CatalogBackend, CatalogQuery, CatalogResponse, SearchBackend, SearchQuery, SearchResponse,
};
use crate::config::BackendEndpoint;
use crate::error::BackendError;

const FACETS_FRAGMENT: &str = r#"
fragment Facets on ProductSearchResponse {
  facets {
    attribute
    title
    type
    buckets {
      ... on ScalarBucket { title count }
      ... on RangeBucket { title count }
      ... on StatsBucket { title }
    }
  }
}
"#;

/// Full-detail catalog query.
pub const CATALOG_PRODUCT_SEARCH: &str = r#"
query productSearch(
  $phrase: String!
  $filter: [SearchClauseInput!]
  $page_size: Int
  $current_page: Int
  $sort: [ProductSearchSortInput!]
) {
  productSearch(
    phrase: $phrase
    filter: $filter
    page_size: $page_size
    current_page: $current_page
    sort: $sort
  ) {
    total_count
    page_info { current_page page_size total_pages }
    ...Facets
    items {
      productView {
        __typename
        id
        name
        sku
        urlKey
        inStock
        images(roles: []) { url label roles }
        attributes(roles: []) { name label value }
        ... on SimpleProductView {
          price {
            regular { amount { value currency } }
            final { amount { value currency } }
          }
        }
        ... on ComplexProductView {
          priceRange {
            minimum {
              regular { amount { value currency } }
              final { amount { value currency } }
            }
            maximum {
              regular { amount { value currency } }
              final { amount { value currency } }
            }
          }
          options {
            id
            title
            values {
              id
              title
              ... on ProductViewOptionValueSwatch { type value inStock }
            }
          }
        }
      }
    }
  }
}
"#;

/// Identity-only ranked query.
pub const SEARCH_PRODUCT_SEARCH: &str = r#"
query productSearch(
  $phrase: String!
  $filter: [SearchClauseInput!]
  $page_size: Int
  $current_page: Int
  $sort: [ProductSearchSortInput!]
) {
  productSearch(
    phrase: $phrase
    filter: $filter
    page_size: $page_size
    current_page: $current_page
    sort: $sort
  ) {
    total_count
    page_info { current_page page_size total_pages }
    ...Facets
    items {
      product { sku }
      productView { sku }
    }
  }
}
"#;

#[derive(Deserialize)]
struct ProductSearchData<T> {
    #[serde(rename = "productSearch")]
    product_search: Option<T>,
}

fn document(query: &str) -> String {
    format!("{}{}", query, FACETS_FRAGMENT)
}

/// Catalog backend over GraphQL.
#[derive(Debug, Clone)]
pub struct GraphQlCatalogBackend {
    client: FetchClient,
    endpoint: String,
    document: String,
}

impl GraphQlCatalogBackend {
    pub fn new(client: FetchClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            document: document(CATALOG_PRODUCT_SEARCH),
        }
    }

    pub fn from_endpoint(endpoint: &BackendEndpoint) -> Self {
        Self::new(endpoint.client(), endpoint.endpoint.clone())
    }
}

#[async_trait]
impl CatalogBackend for GraphQlCatalogBackend {
    async fn product_search(&self, query: &CatalogQuery) -> Result<CatalogResponse, BackendError> {
        let data: ProductSearchData<CatalogResponse> = self
            .client
            .graphql(self.endpoint.as_str(), &self.document, query)
            .await?;
        data.product_search
            .ok_or(BackendError::MissingPayload("productSearch"))
    }
}

/// AI-search backend over GraphQL.
#[derive(Debug, Clone)]
pub struct GraphQlSearchBackend {
    client: FetchClient,
    endpoint: String,
    document: String,
}

impl GraphQlSearchBackend {
    pub fn new(client: FetchClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            document: document(SEARCH_PRODUCT_SEARCH),
        }
    }

    pub fn from_endpoint(endpoint: &BackendEndpoint) -> Self {
        Self::new(endpoint.client(), endpoint.endpoint.clone())
    }
}

#[async_trait]
impl SearchBackend for GraphQlSearchBackend {
    async fn product_search(&self, query: &SearchQuery) -> Result<SearchResponse, BackendError> {
        let data: ProductSearchData<SearchResponse> = self
            .client
            .graphql(self.endpoint.as_str(), &self.document, query)
            .await?;
        data.product_search
            .ok_or(BackendError::MissingPayload("productSearch"))
    }
}
