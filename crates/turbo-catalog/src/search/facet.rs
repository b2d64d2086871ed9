//! UI-ready filter facets.

use serde::{Deserialize, Serialize};

/// A filterable attribute dimension, ready for the storefront sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    /// Display title (e.g., "Color").
    pub title: String,
    /// URL-safe key used in storefront query strings.
    pub key: String,
    /// Backend-native attribute code.
    pub attribute_code: String,
    /// Selection widget.
    #[serde(rename = "type")]
    pub facet_type: FacetType,
    /// Facet values, in backend order.
    pub options: Vec<FacetOption>,
}

/// How a facet's options are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetType {
    /// Multi-select.
    Checkbox,
    /// Single-select (ranges, statistics).
    Radio,
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetOption {
    pub id: String,
    pub name: String,
    /// Number of matching products.
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_serialization() {
        let facet = Facet {
            title: "Color".to_string(),
            key: "color".to_string(),
            attribute_code: "color".to_string(),
            facet_type: FacetType::Checkbox,
            options: vec![FacetOption {
                id: "Red".to_string(),
                name: "Red".to_string(),
                count: 4,
            }],
        };

        let json = serde_json::to_value(&facet).unwrap();
        assert_eq!(json["type"], "checkbox");
        assert_eq!(json["attributeCode"], "color");
        assert_eq!(json["options"][0]["count"], 4);
    }
}
