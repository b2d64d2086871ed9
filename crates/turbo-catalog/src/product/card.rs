//! Product card: the UI-ready shape of a catalog detail record.

use crate::error::TransformError;
use crate::money::Money;
use crate::product::view::{
    ProductView, ViewImage, ViewOption, ViewPrice, ViewPriceAmount, COMPLEX_PRODUCT_VIEW,
    SIMPLE_PRODUCT_VIEW,
};
use serde::{Deserialize, Serialize};

/// Image roles shown ahead of gallery images, in listing order.
const PRIMARY_IMAGE_ROLES: [&str; 3] = ["image", "small_image", "thumbnail"];

/// Attributes read as the product's manufacturer, first match wins.
const MANUFACTURER_ATTRIBUTES: [&str; 2] = ["manufacturer", "brand"];

/// Where a card's price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceKind {
    /// A single regular/final price.
    Simple,
    /// The minimum of a configurable product's price range.
    Complex,
}

/// Card pricing with pre-formatted display strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardPrice {
    pub kind: PriceKind,
    pub regular: Money,
    #[serde(rename = "final")]
    pub final_price: Money,
    pub regular_display: String,
    pub final_display: String,
}

impl CardPrice {
    fn new(kind: PriceKind, regular: Money, final_price: Money) -> Self {
        Self {
            kind,
            regular,
            final_price,
            regular_display: regular.display(),
            final_display: final_price.display(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardImage {
    pub url: String,
    pub label: String,
}

/// A named group of variant choices (e.g., Color).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardOptionGroup {
    pub id: String,
    pub title: String,
    pub values: Vec<CardOptionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardOptionValue {
    pub name: String,
    pub value: String,
    /// Swatch colour, when the value is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

/// A product as listed on a storefront results page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    /// Stock keeping unit (unique, non-empty).
    pub sku: String,
    pub name: String,
    pub url_key: String,
    pub in_stock: bool,
    pub images: Vec<CardImage>,
    pub price: CardPrice,
    /// Whole-percent saving of final over regular price.
    pub discount_percent: u32,
    pub options: Vec<CardOptionGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl ProductCard {
    /// Build a card from a catalog detail record.
    pub fn try_from_view(view: &ProductView) -> Result<Self, TransformError> {
        let sku = non_empty(view.sku.as_deref()).ok_or(TransformError::MissingField("sku"))?;
        let name = non_empty(view.name.as_deref()).ok_or(TransformError::MissingField("name"))?;
        let price = card_price(view)?;
        let discount_percent = price.regular.discount_percent(&price.final_price);

        Ok(Self {
            sku: sku.to_string(),
            name: name.to_string(),
            url_key: view.url_key.clone().unwrap_or_default(),
            in_stock: view.in_stock.unwrap_or(false),
            images: card_images(&view.images, name),
            price,
            discount_percent,
            options: view.options.iter().filter_map(option_group).collect(),
            manufacturer: MANUFACTURER_ATTRIBUTES
                .iter()
                .find_map(|attr| view.attribute(attr)),
        })
    }

    /// Whether the product is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent > 0
    }
}

impl TryFrom<&ProductView> for ProductCard {
    type Error = TransformError;

    fn try_from(view: &ProductView) -> Result<Self, Self::Error> {
        Self::try_from_view(view)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn card_price(view: &ProductView) -> Result<CardPrice, TransformError> {
    let typename = view.typename.as_deref();
    let (kind, pair) = match typename {
        Some(SIMPLE_PRODUCT_VIEW) => (PriceKind::Simple, view.price.as_ref()),
        Some(COMPLEX_PRODUCT_VIEW) => (
            PriceKind::Complex,
            view.price_range.as_ref().and_then(|r| r.minimum.as_ref()),
        ),
        // Untagged records: infer from whichever price shape is present.
        None if view.price.is_some() => (PriceKind::Simple, view.price.as_ref()),
        None if view.price_range.is_some() => (
            PriceKind::Complex,
            view.price_range.as_ref().and_then(|r| r.minimum.as_ref()),
        ),
        None => return Err(TransformError::MissingField("price")),
        Some(other) => return Err(TransformError::UnsupportedType(other.to_string())),
    };

    let pair: &ViewPrice = pair.ok_or(TransformError::MissingField("price"))?;
    let final_price = amount(pair.final_price.as_ref());
    let regular = amount(pair.regular.as_ref());

    match (regular, final_price) {
        (Some(regular), Some(final_price)) => Ok(CardPrice::new(kind, regular, final_price)),
        // One side only: not discounted.
        (Some(only), None) | (None, Some(only)) => Ok(CardPrice::new(kind, only, only)),
        (None, None) => Err(TransformError::MissingField("price")),
    }
}

fn amount(price: Option<&ViewPriceAmount>) -> Option<Money> {
    let amount = price?.amount.as_ref()?;
    let value = amount.value?;
    Some(Money::from_backend(value, amount.currency.as_deref()))
}

fn card_images(images: &[ViewImage], fallback_label: &str) -> Vec<CardImage> {
    let is_primary = |image: &&ViewImage| {
        image
            .roles
            .iter()
            .any(|role| PRIMARY_IMAGE_ROLES.contains(&role.as_str()))
    };

    let (primary, gallery): (Vec<&ViewImage>, Vec<&ViewImage>) =
        images.iter().partition(|image| is_primary(image));

    primary
        .into_iter()
        .chain(gallery)
        .filter_map(|image| {
            let url = non_empty(image.url.as_deref())?;
            let label = non_empty(image.label.as_deref()).unwrap_or(fallback_label);
            Some(CardImage {
                url: url.to_string(),
                label: label.to_string(),
            })
        })
        .collect()
}

fn option_group(option: &ViewOption) -> Option<CardOptionGroup> {
    let title = non_empty(option.title.as_deref())?;
    let values = option
        .values
        .iter()
        .filter_map(|value| {
            let name = non_empty(value.title.as_deref())?;
            let raw = value.value.as_deref().unwrap_or(name);
            let hex = match value.kind.as_deref() {
                Some("COLOR_HEX") => Some(raw.to_string()),
                _ if is_hex_colour(raw) => Some(raw.to_string()),
                _ => None,
            };
            Some(CardOptionValue {
                name: name.to_string(),
                value: raw.to_string(),
                hex,
            })
        })
        .collect();

    Some(CardOptionGroup {
        id: option.id.clone().unwrap_or_else(|| title.to_lowercase()),
        title: title.to_string(),
        values,
    })
}

fn is_hex_colour(value: &str) -> bool {
    value
        .strip_prefix('#')
        .map(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or(false)
}
