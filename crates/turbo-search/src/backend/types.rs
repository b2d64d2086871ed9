//! Backend-native query arguments and responses.

use serde::{Deserialize, Serialize};
use turbo_catalog::de::null_as_default;
use turbo_catalog::product::ProductView;
use turbo_catalog::search::SortDirection;

/// One filter clause in the backends' native shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterInput {
    pub attribute: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeInput>,
}

impl FilterInput {
    pub fn eq(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            eq: Some(value.into()),
            in_values: None,
            range: None,
        }
    }

    pub fn any_of(attribute: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            attribute: attribute.into(),
            eq: None,
            in_values: Some(values),
            range: None,
        }
    }

    pub fn range(attribute: impl Into<String>, from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            attribute: attribute.into(),
            eq: None,
            in_values: None,
            range: Some(RangeInput { from, to }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

/// One sort clause in the backends' native shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortInput {
    pub attribute: String,
    pub direction: SortDirection,
}

/// Catalog query arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogQuery {
    pub phrase: String,
    pub filter: Vec<FilterInput>,
    pub page_size: u32,
    pub current_page: u32,
    /// `None` means backend default order.
    pub sort: Option<SortInput>,
}

/// AI-search query arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub phrase: String,
    pub filter: Vec<FilterInput>,
    pub page_size: u32,
    pub current_page: u32,
    /// Empty means relevance order.
    pub sort: Vec<SortInput>,
}

/// Paging metadata as a backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct BackendPageInfo {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// A facet as a backend reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFacet {
    #[serde(default)]
    pub attribute: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Bucket kind, e.g. `SCALAR`, `RANGE`, `STATS`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buckets: Vec<RawBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawBucket {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "productView", default)]
    pub product_view: Option<ProductView>,
}

/// Catalog query response.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub page_info: Option<BackendPageInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facets: Vec<RawFacet>,
}

impl CatalogResponse {
    /// Detail records, skipping items without one.
    pub fn views(&self) -> impl Iterator<Item = &ProductView> {
        self.items.iter().filter_map(|item| item.product_view.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SkuRef {
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct SearchItem {
    #[serde(default)]
    pub product: Option<SkuRef>,
    #[serde(rename = "productView", default)]
    pub product_view: Option<SkuRef>,
}

impl SearchItem {
    /// The item's SKU, preferring the product view's.
    pub fn sku(&self) -> Option<&str> {
        [self.product_view.as_ref(), self.product.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|r| r.sku.as_deref().filter(|s| !s.is_empty()))
    }
}

/// AI-search query response.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<SearchItem>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub page_info: Option<BackendPageInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facets: Vec<RawFacet>,
}

impl SearchResponse {
    /// SKUs in ranking order.
    pub fn ranked_skus(&self) -> Vec<&str> {
        self.items.iter().filter_map(SearchItem::sku).collect()
    }
}
