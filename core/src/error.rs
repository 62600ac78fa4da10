//! Error types for the Qiita API client.
//!
//! # Design
//! Status-derived variants (`NotFound`, `Unauthorized`, `Forbidden`,
//! `Unknown`) are produced from a [`StatusOutcome`](crate::status::StatusOutcome)
//! by each resource operation. Everything else is raised before a status
//! code exists: bad input, an unreachable server, or a body that does not
//! match the expected shape.

use thiserror::Error;

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The configured base endpoint could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No response was obtained from the server.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A 2xx response body did not decode into the expected type.
    #[error("failed to decode response body: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A 2xx response that should have carried an entity was empty.
    #[error("expected a response body but got none (status = {status})")]
    EmptyBody { status: u16 },

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// `Link` or `Total-Count` headers were missing or malformed.
    #[error("malformed pagination headers: {0}")]
    Pagination(String),

    #[error("{resource} with id '{id}' not found (status = 404)")]
    NotFound { resource: &'static str, id: String },

    #[error("unauthorized. you may have provided no/invalid access token (status = 401)")]
    Unauthorized,

    /// 403. The meaning differs per endpoint, so the hint is advisory.
    #[error("forbidden. {hint} (status = 403)")]
    Forbidden { hint: String },

    #[error("unknown error (status = {status})")]
    Unknown { status: u16, body: String },
}

impl ApiError {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Transport(err.into())
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn forbidden(hint: impl Into<String>) -> Self {
        Self::Forbidden { hint: hint.into() }
    }

    /// True for errors raised before a request reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let err = ApiError::not_found("item", "nonexistent");
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("nonexistent"));
    }

    #[test]
    fn unknown_message_carries_status() {
        let err = ApiError::Unknown {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "unknown error (status = 502)");
    }

    #[test]
    fn unauthorized_message_mentions_token() {
        let msg = ApiError::Unauthorized.to_string();
        assert!(msg.starts_with("unauthorized"));
        assert!(msg.contains("access token"));
    }
}
