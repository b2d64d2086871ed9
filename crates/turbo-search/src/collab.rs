//! Collaborators the engine calls into.
//!
//! Card transformation, facet key mapping and filter building are pure
//! functions supplied to the service as trait objects.

use std::sync::Arc;
use turbo_catalog::product::{ProductCard, ProductView};
use turbo_catalog::TransformError;

use crate::filter::{CatalogFilterBuilder, FilterBuilder, SearchFilterBuilder};

/// Turns a catalog detail record into a card.
pub trait CardTransformer: Send + Sync {
    fn transform(&self, view: &ProductView) -> Result<ProductCard, TransformError>;
}

/// Maps a backend attribute code to a URL-safe facet key.
pub trait FacetKeyMapper: Send + Sync {
    fn key_for(&self, attribute_code: &str) -> String;
}

/// Card transformer backed by [`ProductCard::try_from_view`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCardTransformer;

impl CardTransformer for DefaultCardTransformer {
    fn transform(&self, view: &ProductView) -> Result<ProductCard, TransformError> {
        ProductCard::try_from_view(view)
    }
}

/// Fixed mappings checked before slugging.
const FACET_KEYS: [(&str, &str); 4] = [
    ("categoryPath", "category"),
    ("categories", "category"),
    ("price", "price"),
    ("manufacturer", "brand"),
];

/// Table lookup, falling back to a lower-case slug.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFacetKeys;

impl FacetKeyMapper for DefaultFacetKeys {
    fn key_for(&self, attribute_code: &str) -> String {
        FACET_KEYS
            .iter()
            .find(|(code, _)| *code == attribute_code)
            .map(|(_, key)| key.to_string())
            .unwrap_or_else(|| slug(attribute_code))
    }
}

/// Lower-case, with every run of non-alphanumerics collapsed to one `-`.
fn slug(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for c in code.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Everything the orchestration calls besides the backends.
#[derive(Clone)]
pub struct Collaborators {
    pub catalog_filter: Arc<dyn FilterBuilder>,
    pub search_filter: Arc<dyn FilterBuilder>,
    pub cards: Arc<dyn CardTransformer>,
    pub facet_keys: Arc<dyn FacetKeyMapper>,
}

impl Collaborators {
    /// Replace the card transformer.
    pub fn with_cards(mut self, cards: impl CardTransformer + 'static) -> Self {
        self.cards = Arc::new(cards);
        self
    }

    /// Replace the facet key mapper.
    pub fn with_facet_keys(mut self, keys: impl FacetKeyMapper + 'static) -> Self {
        self.facet_keys = Arc::new(keys);
        self
    }

    /// Replace both filter builders.
    pub fn with_filters(
        mut self,
        catalog: impl FilterBuilder + 'static,
        search: impl FilterBuilder + 'static,
    ) -> Self {
        self.catalog_filter = Arc::new(catalog);
        self.search_filter = Arc::new(search);
        self
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            catalog_filter: Arc::new(CatalogFilterBuilder),
            search_filter: Arc::new(SearchFilterBuilder),
            cards: Arc::new(DefaultCardTransformer),
            facet_keys: Arc::new(DefaultFacetKeys),
        }
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
