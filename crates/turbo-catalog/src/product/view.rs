//! Catalog detail record (`productView`) as returned by the backends.
//!
//! Every field is optional: a record missing something the card needs is
//! rejected per record at transform time, not when the whole response is
//! decoded.

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};

/// `__typename` of a product with a single price.
pub const SIMPLE_PRODUCT_VIEW: &str = "SimpleProductView";
/// `__typename` of a configurable product with a price range and options.
pub const COMPLEX_PRODUCT_VIEW: &str = "ComplexProductView";

/// Full product representation from the catalog backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    /// Discriminates simple and complex pricing.
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub url_key: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ViewImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<ViewAttribute>,
    /// Simple products only.
    #[serde(default)]
    pub price: Option<ViewPrice>,
    /// Complex products only.
    #[serde(default)]
    pub price_range: Option<ViewPriceRange>,
    /// Complex products only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<ViewOption>,
}

impl ProductView {
    /// Look up an attribute by name, as a string.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| match &a.value {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Array(values) => values
                    .first()
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewAttribute {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A regular/final price pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewPrice {
    #[serde(default)]
    pub regular: Option<ViewPriceAmount>,
    #[serde(rename = "final", default)]
    pub final_price: Option<ViewPriceAmount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewPriceAmount {
    #[serde(default)]
    pub amount: Option<ViewAmount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewAmount {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewPriceRange {
    #[serde(default)]
    pub minimum: Option<ViewPrice>,
    #[serde(default)]
    pub maximum: Option<ViewPrice>,
}

/// A configurable option group (e.g., Color).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<ViewOptionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptionValue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Swatch payload: hex colour, image URL, or text.
    #[serde(default)]
    pub value: Option<String>,
    /// Swatch kind, e.g. `COLOR_HEX`, `IMAGE`, `TEXT`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}
