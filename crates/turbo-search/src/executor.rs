//! Backend query execution.
//!
//! Browse mode runs one catalog query. Search mode runs the AI-search and
//! catalog queries concurrently and merges them by SKU in ranking order.

use tracing::debug;
use turbo_catalog::product::{ProductCard, ProductView};
use turbo_catalog::search::SearchRequest;

use crate::backend::{
    BackendPageInfo, CatalogBackend, CatalogQuery, RawFacet, SearchBackend, SearchQuery,
};
use crate::collab::{CardTransformer, Collaborators};
use crate::config::ServiceSettings;
use crate::containment::truncate_message;
use crate::error::SearchError;
use crate::merge::merge_ranked;
use crate::mode::{select_mode, SearchMode};
use crate::translate::{catalog_sort, search_sort};

/// What a query run hands to the assembler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutcome {
    pub items: Vec<ProductCard>,
    /// Paging as the authoritative backend reported it.
    pub page_info: Option<BackendPageInfo>,
    pub total_count: u32,
    /// Raw facets for the search+filter capability.
    pub facets: Vec<RawFacet>,
}

impl QueryOutcome {
    /// Keep only discounted cards. The total becomes the kept count since
    /// no backend can filter on a derived field.
    fn retain_on_sale(&mut self) {
        self.items.retain(ProductCard::is_on_sale);
        self.total_count = count(&self.items);
    }
}

fn count<T>(items: &[T]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

/// Runs queries against a pair of backends.
pub struct QueryExecutor<'a, C: ?Sized, S: ?Sized> {
    catalog: &'a C,
    search: &'a S,
    collaborators: &'a Collaborators,
    settings: ServiceSettings,
}

impl<'a, C, S> QueryExecutor<'a, C, S>
where
    C: CatalogBackend + ?Sized,
    S: SearchBackend + ?Sized,
{
    pub fn new(
        catalog: &'a C,
        search: &'a S,
        collaborators: &'a Collaborators,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            catalog,
            search,
            collaborators,
            settings,
        }
    }

    /// Pick the mode for `request` and run it.
    pub async fn run(&self, request: &SearchRequest) -> Result<QueryOutcome, SearchError> {
        let mode = select_mode(request);
        let limit = self.settings.log_message_limit;
        debug!(
            %mode,
            phrase = truncate_message(request.trimmed_phrase().unwrap_or(""), limit),
            "running product query"
        );
        match mode {
            SearchMode::Browse => self.run_catalog_query(request).await,
            SearchMode::Search => self.run_dual_query(request).await,
        }
    }

    /// Browse mode: catalog only.
    pub async fn run_catalog_query(
        &self,
        request: &SearchRequest,
    ) -> Result<QueryOutcome, SearchError> {
        let query = self.catalog_query(request, "");
        let response = self
            .catalog
            .product_search(&query)
            .await
            .map_err(SearchError::Catalog)?;

        let items = self.to_cards(response.views());
        let mut outcome = QueryOutcome {
            total_count: response.total_count.unwrap_or_else(|| count(&items)),
            items,
            page_info: response.page_info,
            facets: response.facets,
        };
        if request.filter.on_sale_only {
            outcome.retain_on_sale();
        }

        debug!(mode = "browse", items = outcome.items.len(), total = outcome.total_count, "catalog query done");
        Ok(outcome)
    }

    /// Search mode: AI ranking plus catalog detail, joined.
    ///
    /// Both calls are always awaited to completion. If either failed the
    /// whole run fails, reporting the search side first.
    pub async fn run_dual_query(&self, request: &SearchRequest) -> Result<QueryOutcome, SearchError> {
        let phrase = request.trimmed_phrase().unwrap_or("");
        let search_query = self.search_query(request, phrase);
        let catalog_query = self.catalog_query(request, phrase);

        let (ranked, detail) = futures::join!(
            self.search.product_search(&search_query),
            self.catalog.product_search(&catalog_query)
        );
        let ranked = ranked.map_err(SearchError::Search)?;
        let detail = detail.map_err(SearchError::Catalog)?;

        let cards = self.to_cards(detail.views());
        let skus = ranked.ranked_skus();
        let items: Vec<ProductCard> = merge_ranked(&skus, &cards, |card| card.sku.as_str())
            .into_iter()
            .cloned()
            .collect();
        let ranked_len = skus.len();
        let unmatched = ranked_len - items.len();

        let facets = if ranked.facets.is_empty() {
            detail.facets
        } else {
            ranked.facets
        };
        let mut outcome = QueryOutcome {
            total_count: ranked.total_count.unwrap_or_else(|| count(&items)),
            items,
            page_info: ranked.page_info,
            facets,
        };
        if request.filter.on_sale_only {
            outcome.retain_on_sale();
        }

        debug!(
            mode = "search",
            ranked = ranked_len,
            unmatched,
            items = outcome.items.len(),
            total = outcome.total_count,
            "dual query done"
        );
        Ok(outcome)
    }

    /// Transform detail records, dropping any that fail.
    fn to_cards<'v>(&self, views: impl Iterator<Item = &'v ProductView>) -> Vec<ProductCard> {
        let limit = self.settings.log_message_limit;
        views
            .filter_map(|view| match self.collaborators.cards.transform(view) {
                Ok(card) => Some(card),
                Err(err) => {
                    let message = err.to_string();
                    debug!(
                        sku = truncate_message(view.sku.as_deref().unwrap_or(""), limit),
                        error = truncate_message(&message, limit),
                        "dropping product record"
                    );
                    None
                }
            })
            .collect()
    }

    fn page_args(&self, request: &SearchRequest) -> (u32, u32) {
        (
            request
                .requested_limit()
                .unwrap_or(self.settings.default_page_size),
            request.requested_page().unwrap_or(1),
        )
    }

    fn catalog_query(&self, request: &SearchRequest, phrase: &str) -> CatalogQuery {
        let (page_size, current_page) = self.page_args(request);
        CatalogQuery {
            phrase: phrase.to_string(),
            filter: self.collaborators.catalog_filter.build(&request.filter),
            page_size,
            current_page,
            sort: catalog_sort(request.sort.as_ref()),
        }
    }

    fn search_query(&self, request: &SearchRequest, phrase: &str) -> SearchQuery {
        let (page_size, current_page) = self.page_args(request);
        SearchQuery {
            phrase: phrase.to_string(),
            filter: self.collaborators.search_filter.build(&request.filter),
            page_size,
            current_page,
            sort: search_sort(request.sort.as_ref()),
        }
    }
}
