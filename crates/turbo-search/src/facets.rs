//! Backend facets → UI filter facets.

use turbo_catalog::search::{Facet, FacetOption, FacetType};

use crate::backend::RawFacet;
use crate::collab::FacetKeyMapper;

/// Bucket kind that allows several values at once.
pub const SCALAR_BUCKET: &str = "SCALAR";

/// Checkbox for multi-valued buckets, radio for everything else.
pub fn facet_type(kind: Option<&str>) -> FacetType {
    match kind {
        Some(SCALAR_BUCKET) => FacetType::Checkbox,
        _ => FacetType::Radio,
    }
}

/// Normalize raw facets, keeping their order. Facets without an attribute
/// code cannot be filtered on and are skipped.
pub fn transform_facets(raw: &[RawFacet], keys: &dyn FacetKeyMapper) -> Vec<Facet> {
    raw.iter()
        .filter(|facet| !facet.attribute.trim().is_empty())
        .map(|facet| transform_facet(facet, keys))
        .collect()
}

fn transform_facet(raw: &RawFacet, keys: &dyn FacetKeyMapper) -> Facet {
    Facet {
        title: raw.title.clone().unwrap_or_else(|| raw.attribute.clone()),
        key: keys.key_for(&raw.attribute),
        attribute_code: raw.attribute.clone(),
        facet_type: facet_type(raw.kind.as_deref()),
        options: raw
            .buckets
            .iter()
            .map(|bucket| FacetOption {
                id: bucket.title.clone(),
                name: bucket.title.clone(),
                count: bucket.count.unwrap_or(0),
            })
            .collect(),
    }
}
