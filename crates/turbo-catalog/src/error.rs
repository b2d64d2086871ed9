//! Catalog error types.

use thiserror::Error;

/// Errors raised while turning a catalog detail record into a product card.
///
/// These are per-record: the caller drops the offending record and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A required field was absent or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The record carried a `__typename` we have no pricing rules for.
    #[error("Unsupported product type: {0}")]
    UnsupportedType(String),
}
