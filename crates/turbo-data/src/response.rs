//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// Longest body prefix carried into an `HttpError` message.
const ERROR_BODY_PREFIX: usize = 200;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Read status and body out of a reqwest response.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, FetchError> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(Self::new(status, body))
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let text = String::from_utf8_lossy(&self.body);
        let cut = text.char_indices().nth(ERROR_BODY_PREFIX).map(|(i, _)| i);
        let message = match cut {
            Some(cut) => format!("{}...", &text[..cut]),
            None if text.is_empty() => "Unknown error".to_string(),
            None => text.into_owned(),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(503, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug, PartialEq)]
        struct Data {
            value: i32,
        }

        let resp = make_response(200, br#"{"value": 42}"#);
        let data: Data = resp.json().unwrap();
        assert_eq!(data, Data { value: 42 });

        let resp = make_response(200, b"not json");
        assert!(matches!(resp.json::<Data>(), Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_error_for_status() {
        assert!(make_response(200, b"ok").error_for_status().is_ok());

        match make_response(502, b"bad gateway").error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_truncates_body() {
        let body = "x".repeat(1000);
        match make_response(500, body.as_bytes()).error_for_status() {
            Err(FetchError::HttpError { message, .. }) => {
                assert_eq!(message.len(), ERROR_BODY_PREFIX + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_empty_body() {
        match make_response(404, b"").error_for_status() {
            Err(FetchError::HttpError { message, .. }) => assert_eq!(message, "Unknown error"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
