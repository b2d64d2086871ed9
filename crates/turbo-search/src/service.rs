//! The two public product-search capabilities.

use turbo_catalog::search::SearchRequest;

use crate::assemble::{assemble_cards, assemble_search, CardsResponse, ProductSearchResponse};
use crate::backend::{CatalogBackend, GraphQlCatalogBackend, GraphQlSearchBackend, SearchBackend};
use crate::collab::Collaborators;
use crate::config::{SearchConfig, ServiceSettings};
use crate::containment::{contain, EmptyEnvelope, FailurePolicy};
use crate::error::SearchError;
use crate::executor::QueryExecutor;

/// Cards failures reach the caller.
pub const CARDS_POLICY: FailurePolicy = FailurePolicy::Propagate;

/// Search+filter failures become an empty envelope.
pub const SEARCH_POLICY: FailurePolicy = FailurePolicy::EmptyEnvelope;

/// Product search over a catalog backend and an AI-search backend.
///
/// Holds no per-request state; one service can serve concurrent requests.
#[derive(Debug)]
pub struct ProductSearchService<C, S> {
    catalog: C,
    search: S,
    collaborators: Collaborators,
    settings: ServiceSettings,
}

impl ProductSearchService<GraphQlCatalogBackend, GraphQlSearchBackend> {
    /// Wire GraphQL backends from configuration.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            GraphQlCatalogBackend::from_endpoint(&config.catalog),
            GraphQlSearchBackend::from_endpoint(&config.search),
        )
        .with_settings(config.settings())
    }
}

impl<C, S> ProductSearchService<C, S>
where
    C: CatalogBackend,
    S: SearchBackend,
{
    /// Create a service with default collaborators and settings.
    pub fn new(catalog: C, search: S) -> Self {
        Self {
            catalog,
            search,
            collaborators: Collaborators::default(),
            settings: ServiceSettings::default(),
        }
    }

    /// Replace the collaborators.
    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Replace the settings.
    pub fn with_settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn executor(&self) -> QueryExecutor<'_, C, S> {
        QueryExecutor::new(&self.catalog, &self.search, &self.collaborators, self.settings)
    }

    /// Product cards for a listing page. Backend failures are returned.
    pub async fn product_cards(
        &self,
        request: &SearchRequest,
    ) -> Result<CardsResponse, SearchError> {
        let result = self
            .executor()
            .run(request)
            .await
            .map(|outcome| assemble_cards(outcome, request, &self.settings));
        contain(CARDS_POLICY, "productCards", result, request, &self.settings)
    }

    /// Products plus facets. Never fails; a backend failure yields the
    /// empty envelope.
    pub async fn product_search(&self, request: &SearchRequest) -> ProductSearchResponse {
        let result = self.executor().run(request).await.map(|outcome| {
            assemble_search(
                outcome,
                request,
                &self.settings,
                self.collaborators.facet_keys.as_ref(),
            )
        });
        // Under SEARCH_POLICY `contain` only returns Ok; the fallback keeps
        // this path total if the policy constant changes.
        contain(SEARCH_POLICY, "productSearch", result, request, &self.settings)
            .unwrap_or_else(|_| ProductSearchResponse::empty_envelope(request, &self.settings))
    }
}
