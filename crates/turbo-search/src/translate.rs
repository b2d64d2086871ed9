//! Unified sort → backend-native sort.

use turbo_catalog::search::{SearchSort, SortAttribute};

use crate::backend::SortInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Catalog,
    Search,
}

/// Native attribute name, if `backend` can sort on it.
fn native_attribute(attribute: &SortAttribute, backend: Backend) -> Option<&'static str> {
    match (attribute, backend) {
        (SortAttribute::Price, _) => Some("price"),
        (SortAttribute::Name, _) => Some("name"),
        (SortAttribute::Relevance, Backend::Search) => Some("relevance"),
        // The catalog has no relevance concept.
        (SortAttribute::Relevance, Backend::Catalog) => None,
        (SortAttribute::Other(_), _) => None,
    }
}

fn sort_input(sort: Option<&SearchSort>, backend: Backend) -> Option<SortInput> {
    let sort = sort?;
    let attribute = native_attribute(&sort.attribute, backend)?;
    Some(SortInput {
        attribute: attribute.to_string(),
        direction: sort.direction(),
    })
}

/// Catalog sort argument. `None` is "no sort", which is also what an
/// untranslatable sort becomes.
pub fn catalog_sort(sort: Option<&SearchSort>) -> Option<SortInput> {
    sort_input(sort, Backend::Catalog)
}

/// AI-search sort argument. Empty means relevance order.
pub fn search_sort(sort: Option<&SearchSort>) -> Vec<SortInput> {
    sort_input(sort, Backend::Search).into_iter().collect()
}
