//! GraphQL request and response envelopes.

use crate::FetchError;
use serde::{Deserialize, Serialize};

/// A GraphQL operation: document plus variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

/// The standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    /// Take the data, failing if the server reported any error.
    ///
    /// Partial data alongside errors is treated as a failure.
    pub fn into_result(self) -> Result<T, FetchError> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(FetchError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => self.data.ok_or(FetchError::MissingData),
        }
    }
}
