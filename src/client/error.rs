//! PixelHub client error types

use thiserror::Error;

/// Errors that can occur while talking to the PixelHub API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Caller asked for something the helper does not support
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure, non-2xx status, or a body that is not JSON
    #[error("HTTP error when calling {endpoint}: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was JSON but not the expected envelope shape
    #[error("Unexpected response from {endpoint}: {source}")]
    Envelope {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client could not be constructed
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a request error for an endpoint
    pub fn request(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an envelope decoding error for an endpoint
    pub fn envelope(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Envelope {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Endpoint the failure relates to, if any
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Request { endpoint, .. } | Self::Envelope { endpoint, .. } => Some(endpoint),
            Self::InvalidArgument(_) | Self::Config(_) => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
