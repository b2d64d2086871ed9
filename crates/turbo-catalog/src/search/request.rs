//! Unified search request.
//!
//! One vocabulary for both backends: the engine translates it into each
//! backend's native arguments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute to sort on.
///
/// Unrecognized attribute names are kept verbatim in `Other` so that
/// translation can fall back instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortAttribute {
    Price,
    Name,
    /// Relevance ranking; only the AI-search backend understands it.
    Relevance,
    Other(String),
}

impl SortAttribute {
    pub fn as_str(&self) -> &str {
        match self {
            SortAttribute::Price => "PRICE",
            SortAttribute::Name => "NAME",
            SortAttribute::Relevance => "RELEVANCE",
            SortAttribute::Other(name) => name,
        }
    }
}

impl From<String> for SortAttribute {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "PRICE" => SortAttribute::Price,
            "NAME" => SortAttribute::Name,
            "RELEVANCE" => SortAttribute::Relevance,
            _ => SortAttribute::Other(s),
        }
    }
}

impl From<&str> for SortAttribute {
    fn from(s: &str) -> Self {
        SortAttribute::from(s.to_string())
    }
}

impl From<SortAttribute> for String {
    fn from(attr: SortAttribute) -> Self {
        attr.as_str().to_string()
    }
}

/// Sort direction. Anything other than `ASC` reads as descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl From<String> for SortDirection {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("ASC") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

impl From<SortDirection> for String {
    fn from(dir: SortDirection) -> Self {
        dir.as_str().to_string()
    }
}

/// Requested ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSort {
    pub attribute: SortAttribute,
    /// Missing direction means descending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SearchSort {
    /// Create a sort with an explicit direction.
    pub fn new(attribute: impl Into<SortAttribute>, direction: SortDirection) -> Self {
        Self {
            attribute: attribute.into(),
            direction: Some(direction),
        }
    }

    /// The effective direction.
    pub fn direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }
}

/// Inclusive numeric range; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RangeBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

/// A constraint on one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterConstraint {
    /// Exact match.
    Eq(String),
    /// Any of the listed values (OR).
    In(Vec<String>),
    /// Numeric range, e.g. price.
    Range(RangeBounds),
}

/// Attribute filters plus the derived on-sale flag.
///
/// Serialized as one flat object:
/// `{ "color": { "in": ["red"] }, "onSaleOnly": true }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchFilter {
    /// Keep only cards with a positive discount. Applied after the query,
    /// never forwarded to a backend.
    #[serde(rename = "onSaleOnly", default)]
    pub on_sale_only: bool,
    /// Attribute code → constraint.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, FilterConstraint>,
}

impl SearchFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute constraint, replacing any previous one.
    pub fn with(mut self, attribute: impl Into<String>, constraint: FilterConstraint) -> Self {
        self.attributes.insert(attribute.into(), constraint);
        self
    }

    /// Whether no attribute constraint is set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A storefront product-search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchRequest {
    /// Free-text query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    #[serde(default)]
    pub filter: SearchFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    /// Requested page (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Requested page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchRequest {
    /// Create an empty request (browse everything, backend defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }

    /// Replace the filter.
    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Keep only discounted products.
    pub fn on_sale_only(mut self) -> Self {
        self.filter.on_sale_only = true;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page.max(1));
        self.limit = Some(limit.max(1));
        self
    }

    /// The phrase with surrounding whitespace removed, if anything is left.
    pub fn trimmed_phrase(&self) -> Option<&str> {
        self.phrase
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// The requested page, ignoring a zero page.
    pub fn requested_page(&self) -> Option<u32> {
        self.page.filter(|p| *p >= 1)
    }

    /// The requested page size, ignoring a zero limit.
    pub fn requested_limit(&self) -> Option<u32> {
        self.limit.filter(|l| *l >= 1)
    }
}
