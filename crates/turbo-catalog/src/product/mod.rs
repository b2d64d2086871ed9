//! Product module.
//!
//! Contains the catalog detail record and the product card derived from it.

mod card;
mod view;

pub use card::{CardImage, CardOptionGroup, CardOptionValue, CardPrice, PriceKind, ProductCard};
pub use view::{
    ProductView, ViewAmount, ViewAttribute, ViewImage, ViewOption, ViewOptionValue, ViewPrice,
    ViewPriceAmount, ViewPriceRange, COMPLEX_PRODUCT_VIEW, SIMPLE_PRODUCT_VIEW,
};
