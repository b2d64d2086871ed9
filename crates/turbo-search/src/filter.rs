//! Unified filter → backend-native filter clauses.

use turbo_catalog::search::{FilterConstraint, SearchFilter};

use crate::backend::FilterInput;

/// Attribute used to restrict product visibility per surface.
pub const VISIBILITY_ATTRIBUTE: &str = "visibility";

/// Builds one backend's filter clauses from the unified filter.
///
/// Implementations read the filter and never mutate shared state, so the
/// two translations of one request are independent.
pub trait FilterBuilder: Send + Sync {
    fn build(&self, filter: &SearchFilter) -> Vec<FilterInput>;
}

/// Filter clauses for the catalog backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogFilterBuilder;

/// Filter clauses for the AI-search backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilterBuilder;

impl FilterBuilder for CatalogFilterBuilder {
    fn build(&self, filter: &SearchFilter) -> Vec<FilterInput> {
        with_visibility(attribute_clauses(filter), filter, &["Catalog", "Catalog, Search"])
    }
}

impl FilterBuilder for SearchFilterBuilder {
    fn build(&self, filter: &SearchFilter) -> Vec<FilterInput> {
        with_visibility(attribute_clauses(filter), filter, &["Search", "Catalog, Search"])
    }
}

/// One clause per attribute constraint. `onSaleOnly` is derived and never
/// forwarded.
fn attribute_clauses(filter: &SearchFilter) -> Vec<FilterInput> {
    filter
        .attributes
        .iter()
        .map(|(attribute, constraint)| match constraint {
            FilterConstraint::Eq(value) => FilterInput::eq(attribute.as_str(), value.as_str()),
            FilterConstraint::In(values) => FilterInput::any_of(attribute.as_str(), values.clone()),
            FilterConstraint::Range(bounds) => {
                FilterInput::range(attribute.as_str(), bounds.from, bounds.to)
            }
        })
        .collect()
}

fn with_visibility(
    mut clauses: Vec<FilterInput>,
    filter: &SearchFilter,
    visible_in: &[&str],
) -> Vec<FilterInput> {
    if !filter.attributes.contains_key(VISIBILITY_ATTRIBUTE) {
        clauses.push(FilterInput::any_of(
            VISIBILITY_ATTRIBUTE,
            visible_in.iter().map(|v| v.to_string()).collect(),
        ));
    }
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_catalog::search::RangeBounds;

    fn filter() -> SearchFilter {
        SearchFilter {
            on_sale_only: true,
            ..SearchFilter::new()
                .with("color", FilterConstraint::In(vec!["red".to_string()]))
                .with(
                    "price",
                    FilterConstraint::Range(RangeBounds {
                        from: Some(10.0),
                        to: None,
                    }),
                )
        }
    }

    #[test]
    fn test_catalog_clauses() {
        let clauses = CatalogFilterBuilder.build(&filter());
        assert_eq!(
            clauses,
            vec![
                FilterInput::any_of("color", vec!["red".to_string()]),
                FilterInput::range("price", Some(10.0), None),
                FilterInput::any_of(
                    "visibility",
                    vec!["Catalog".to_string(), "Catalog, Search".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_search_clauses_use_search_visibility() {
        let clauses = SearchFilterBuilder.build(&filter());
        let visibility = clauses.last().unwrap();
        assert_eq!(
            visibility.in_values.as_deref(),
            Some(&["Search".to_string(), "Catalog, Search".to_string()][..])
        );
        assert!(clauses.iter().all(|c| c.attribute != "onSaleOnly"));
    }

    #[test]
    fn test_caller_visibility_wins() {
        let filter = SearchFilter::new().with(
            VISIBILITY_ATTRIBUTE,
            FilterConstraint::Eq("Search".to_string()),
        );
        let clauses = SearchFilterBuilder.build(&filter);
        assert_eq!(clauses, vec![FilterInput::eq("visibility", "Search")]);
    }

    #[test]
    fn test_translations_do_not_share_state() {
        let filter = filter();
        let before = filter.clone();
        let catalog = CatalogFilterBuilder.build(&filter);
        let search = SearchFilterBuilder.build(&filter);
        assert_eq!(filter, before);
        assert_ne!(catalog, search);
    }
}
