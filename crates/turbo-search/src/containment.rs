//! Failure containment for the public capabilities.
//!
//! Each capability owns a fixed [`FailurePolicy`]; both go through
//! [`contain`] so the difference between them is one value.

use tracing::error;
use turbo_catalog::search::SearchRequest;

use crate::assemble::{ProductList, ProductSearchResponse};
use crate::config::ServiceSettings;
use crate::error::SearchError;

/// What a capability does with a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and hand the error to the caller.
    Propagate,
    /// Log and answer with the response type's empty envelope.
    EmptyEnvelope,
}

/// A response with a well-formed "nothing found" value.
pub trait EmptyEnvelope {
    fn empty_envelope(request: &SearchRequest, settings: &ServiceSettings) -> Self;
}

impl EmptyEnvelope for ProductList {
    fn empty_envelope(request: &SearchRequest, settings: &ServiceSettings) -> Self {
        ProductList::empty(request, settings)
    }
}

impl EmptyEnvelope for ProductSearchResponse {
    fn empty_envelope(request: &SearchRequest, settings: &ServiceSettings) -> Self {
        ProductSearchResponse::empty(request, settings)
    }
}

/// At most `limit` characters of `message`, cut on a char boundary.
pub fn truncate_message(message: &str, limit: usize) -> &str {
    match message.char_indices().nth(limit) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}

/// Apply `policy` to a capability result.
///
/// Failures are always logged, truncated to the configured limit. Under
/// [`FailurePolicy::EmptyEnvelope`] the result is never `Err`.
pub fn contain<T: EmptyEnvelope>(
    policy: FailurePolicy,
    capability: &'static str,
    result: Result<T, SearchError>,
    request: &SearchRequest,
    settings: &ServiceSettings,
) -> Result<T, SearchError> {
    let err = match result {
        Ok(response) => return Ok(response),
        Err(err) => err,
    };

    let message = err.to_string();
    error!(
        capability,
        backend = err.backend(),
        ?policy,
        error = truncate_message(&message, settings.log_message_limit),
        "product query failed"
    );

    match policy {
        FailurePolicy::Propagate => Err(err),
        FailurePolicy::EmptyEnvelope => Ok(T::empty_envelope(request, settings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use turbo_data::FetchError;

    fn failure<T>() -> Result<T, SearchError> {
        Err(SearchError::Catalog(BackendError::Transport(
            FetchError::HttpError {
                status: 503,
                message: "Service Unavailable".to_string(),
            },
        )))
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("short", 60), "short");
        assert_eq!(truncate_message("abcdef", 3), "abc");
        assert_eq!(truncate_message("héllo", 2), "hé");
        assert_eq!(truncate_message("", 5), "");
        let long = "x".repeat(200);
        assert_eq!(truncate_message(&long, 60).len(), 60);
    }

    #[test]
    fn test_propagate_reraises() {
        let request = SearchRequest::new();
        let result: Result<ProductList, _> = contain(
            FailurePolicy::Propagate,
            "productCards",
            failure(),
            &request,
            &ServiceSettings::default(),
        );
        assert!(matches!(result, Err(SearchError::Catalog(_))));
    }

    #[test]
    fn test_empty_envelope_swallows() {
        let request = SearchRequest::new();
        let settings = ServiceSettings::default();
        let result: Result<ProductSearchResponse, _> = contain(
            FailurePolicy::EmptyEnvelope,
            "productSearch",
            failure(),
            &request,
            &settings,
        );
        assert_eq!(
            result.unwrap(),
            ProductSearchResponse::empty(&request, &settings)
        );
    }

    #[test]
    fn test_success_passes_through() {
        let request = SearchRequest::new();
        let settings = ServiceSettings::default();
        let list = ProductList::empty(&request, &settings);
        let result = contain(
            FailurePolicy::Propagate,
            "productCards",
            Ok(list.clone()),
            &request,
            &settings,
        );
        assert_eq!(result.unwrap(), list);
    }
}
