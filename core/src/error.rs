//! Error types for the SC2 Arcade API client.
//!
//! Failures are split by where they happen. `Config` is raised before any
//! request exists, `Transport` when no response came back, and `NotFound`,
//! `Http` or `Deserialization` once a response is in hand. `NotImplemented`
//! is returned without touching the transport at all.

use thiserror::Error;

/// Errors returned by `Sc2ArcadeClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation exists on the remote API but the client does not support it.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, timeout...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<figment::Error> for ApiError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::Http {
            status: 503,
            body: "maintenance".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: maintenance");
    }

    #[test]
    fn not_implemented_names_the_operation() {
        let err = ApiError::NotImplemented("get_lobbies_match");
        assert_eq!(err.to_string(), "get_lobbies_match is not implemented");
    }
}
