//! API Error Taxonomy
//!
//! Distinguishes transport failures, non-2xx responses, and bodies that
//! fail to decode, so callers can react to each without parsing strings.

use thiserror::Error;

/// Error produced by the todo API bindings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, abort).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Request(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_failures_map_to_decode() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn transport_failures_map_to_request() {
        let err: ApiError = gloo_net::Error::GlooError("connection refused".into()).into();
        assert!(matches!(err, ApiError::Request(_)));
    }
}
