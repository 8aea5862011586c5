//! Error types for backend communication.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a single request to the analysis server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The configured server URL is unusable.
    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The request could not be sent or no response arrived.
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// The server answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body was not the expected JSON.
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

/// Failure of a data plugin client operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The startup discovery request failed.
    #[error("Could not discover data plugins: {source}")]
    DiscoveryFailed {
        #[source]
        source: TransportError,
    },

    /// Loading the data plugin at `index` failed.
    #[error("Could not load data plugin #{index}: {source}")]
    LoadFailed {
        index: usize,
        #[source]
        source: TransportError,
    },

    /// A course or instructor query failed.
    #[error("Query failed: {source}")]
    QueryFailed {
        #[source]
        source: TransportError,
    },
}

impl ClientError {
    /// The underlying transport failure.
    pub fn transport(&self) -> &TransportError {
        match self {
            Self::DiscoveryFailed { source }
            | Self::LoadFailed { source, .. }
            | Self::QueryFailed { source } => source,
        }
    }
}
