//! Devbook Client Library
//!
//! HTTP client for the Devbook search and indexing API.

mod client;
mod request;
pub mod transport;

pub use client::Client;
pub use devbook_core::{
    ApiVersion, ClientConfig, ConfigError, EntriesOptions, EntriesPage, Entry, ExtensionInfo,
    Indexes, SearchOptions,
};
pub use transport::{BoxError, HttpRequest, HttpResponse, HttpTransport, Transport};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No response was received; the transport's own error is kept as the source
    #[error("HTTP request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Server error: {status} - {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The reqwest client could not be built; no request was sent
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Server repeated page cursor {0}")]
    RepeatedCursor(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::UnexpectedResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
